//! Core data shaping for the CRC carbon-reduction dashboard.
//!
//! The modules turn raw detection records fetched from the recycling API into
//! presentation rows, then derive the filtered table and chart series the
//! dashboard renders.

pub mod config;
pub mod prelude;
pub mod record;
pub mod telemetry;
pub mod transform;
pub mod view;

pub use config::DashboardConfig;
pub use prelude::{DashboardError, DashboardResult};
pub use record::{DetectionRow, RawDetection};
pub use transform::transform_records;
pub use view::DashboardView;
