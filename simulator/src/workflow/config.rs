use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub port: u16,
    pub generator: GeneratorConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            port: 9000,
            generator: GeneratorConfig::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading simulator config {}", path_ref.display()))?;
        let config: SimulatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing simulator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(records: usize, seed: u64, port: u16) -> Self {
        Self {
            port,
            generator: GeneratorConfig {
                records,
                seed,
                ..Default::default()
            },
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_sets_generator() {
        let cfg = SimulatorConfig::from_args(50, 3, 9100);
        assert_eq!(cfg.generator.records, 50);
        assert_eq!(cfg.bind_address().port(), 9100);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"port: 9200\ngenerator:\n  records: 12\n  start_date: \"2023-05-01\"\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = SimulatorConfig::load(&path).unwrap();
        assert_eq!(cfg.port, 9200);
        assert_eq!(cfg.generator.records, 12);
        assert_eq!(cfg.generator.start_date, "2023-05-01");
        assert_eq!(cfg.generator.max_count, GeneratorConfig::default().max_count);
    }
}
