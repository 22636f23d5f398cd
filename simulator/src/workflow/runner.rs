use crate::generator::profile::build_detections;
use crate::workflow::config::SimulatorConfig;
use anyhow::Context;
use crccore::record::RawDetection;
use crccore::view::available_years;
use std::fs;
use std::path::Path;

pub struct RunSummary {
    pub records: Vec<RawDetection>,
    pub years: Vec<i32>,
    pub recyclable: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: SimulatorConfig,
}

impl Runner {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Generates a batch and checks it normalizes the way the dashboard will.
    pub fn execute(&self) -> anyhow::Result<RunSummary> {
        let records =
            build_detections(&self.config.generator).context("generating detections")?;
        let rows =
            crccore::transform_records(&records).context("normalizing generated detections")?;
        let recyclable = rows
            .iter()
            .filter(|row| row.recyclable == crccore::record::Recyclability::Recyclable)
            .count();

        Ok(RunSummary {
            years: available_years(&rows),
            recyclable,
            records,
        })
    }

    pub fn dump<P: AsRef<Path>>(&self, summary: &RunSummary, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&summary.records)?;
        fs::write(path_ref, body)
            .with_context(|| format!("writing fixture {}", path_ref.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(SimulatorConfig::from_args(40, 1, 9000));
        let summary = runner.execute().unwrap();
        assert_eq!(summary.records.len(), 40);
        assert!(summary.recyclable <= 40);
        assert!(summary.years.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn dump_writes_decodable_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures/detections.json");
        let runner = Runner::new(SimulatorConfig::from_args(5, 2, 9000));
        let summary = runner.execute().unwrap();
        runner.dump(&summary, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let decoded: Vec<RawDetection> = serde_json::from_str(&contents).unwrap();
        assert_eq!(decoded, summary.records);
    }
}
