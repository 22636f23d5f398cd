use crate::api::model::{HealthReport, SharedRecords};
use crccore::record::RawDetection;
use log::info;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use warp::{http::StatusCode, Filter};

/// Serves generated detections the way the production backend does.
pub struct DetectionApi {
    state: SharedRecords,
    auth_token: Option<String>,
}

impl DetectionApi {
    pub fn new(auth_token: Option<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Vec::new())),
            auth_token,
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());
        let expected = self.auth_token.clone();

        let detections = warp::path!("api" / "detections" / "result")
            .and(warp::get())
            .and(warp::header::optional::<String>("authorization"))
            .and(state_filter.clone())
            .map(move |authorization: Option<String>, state: SharedRecords| {
                if !authorized(expected.as_deref(), authorization.as_deref()) {
                    return warp::reply::with_status(
                        warp::reply::json(&json!({"error": "unauthorized"})),
                        StatusCode::UNAUTHORIZED,
                    );
                }
                let records = read_records(&state);
                warp::reply::with_status(warp::reply::json(&records), StatusCode::OK)
            });

        let health = warp::path!("health")
            .and(warp::get())
            .and(state_filter)
            .map(|state: SharedRecords| {
                warp::reply::json(&HealthReport::ok(read_records(&state).len()))
            });

        detections
            .or(health)
            .with(warp::cors().allow_any_origin().allow_methods(vec!["GET"]))
            .with(warp::log("simulator::api"))
    }

    pub fn publish(&self, records: Vec<RawDetection>) {
        let count = records.len();
        match self.state.write() {
            Ok(mut guard) => *guard = records,
            Err(poisoned) => *poisoned.into_inner() = records,
        }
        info!("[API] serving {} detection records", count);
    }

    pub async fn serve(&self, address: SocketAddr) {
        info!("[API] listening on http://{}/api/detections/result", address);
        warp::serve(self.routes()).run(address).await;
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<RawDetection> {
        read_records(&self.state)
    }
}

fn read_records(state: &SharedRecords) -> Vec<RawDetection> {
    match state.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn authorized(expected: Option<&str>, header: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(token) => header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map_or(false, |presented| presented == token),
    }
}
