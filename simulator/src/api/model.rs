use crccore::record::RawDetection;
use serde::Serialize;
use std::sync::{Arc, RwLock};

pub type SharedRecords = Arc<RwLock<Vec<RawDetection>>>;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub records: usize,
}

impl HealthReport {
    pub fn ok(records: usize) -> Self {
        Self {
            status: "ok",
            records,
        }
    }
}
