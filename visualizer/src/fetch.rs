use crccore::prelude::{DashboardError, DashboardResult};
use crccore::record::RawDetection;
use crccore::DashboardConfig;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

/// One GET against the detection endpoint.
pub async fn fetch_detections(config: DashboardConfig) -> DashboardResult<Vec<RawDetection>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs.max(1)))
        .build()
        .map_err(|e| DashboardError::Request(e.to_string()))?;

    let mut request = client.get(&config.endpoint);
    if let Some(header) = config.authorization_header() {
        request = request.header(AUTHORIZATION, header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| DashboardError::Request(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::Status(status.as_u16()));
    }
    response
        .json::<Vec<RawDetection>>()
        .await
        .map_err(|e| DashboardError::Decode(e.to_string()))
}
