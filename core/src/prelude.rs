/// Common error type for fetching and shaping detection data.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not decode detections: {0}")]
    Decode(String),
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
