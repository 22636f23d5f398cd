use crate::prelude::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://10.125.121.221:8080/api/detections/result";
pub const ENDPOINT_ENV: &str = "CRC_DASHBOARD_ENDPOINT";
pub const TOKEN_ENV: &str = "CRC_DASHBOARD_TOKEN";

/// Where and how the dashboard fetches detections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: String,
    /// JWT issued by the backend login; sent as a bearer token.
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            auth_token: None,
            timeout_secs: 10,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            DashboardError::Config(format!("reading {}: {}", path_ref.display(), err))
        })?;
        serde_yaml::from_str(&contents).map_err(|err| {
            DashboardError::Config(format!("parsing {}: {}", path_ref.display(), err))
        })
    }

    /// Applies `CRC_DASHBOARD_ENDPOINT` / `CRC_DASHBOARD_TOKEN` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|value| !value.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(token) = lookup(TOKEN_ENV).filter(|value| !value.trim().is_empty()) {
            self.auth_token = Some(token);
        }
        self
    }

    /// Value for the `Authorization` header, if a token is configured.
    pub fn authorization_header(&self) -> Option<String> {
        let token = self.auth_token.as_deref()?.trim();
        if token.is_empty() {
            None
        } else if token.starts_with("Bearer ") {
            Some(token.to_string())
        } else {
            Some(format!("Bearer {}", token))
        }
    }
}
