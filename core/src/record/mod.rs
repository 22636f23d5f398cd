pub mod detection;
pub mod row;

pub use detection::{CarbonValue, CountValue, RawDetection, RecyclableFlag};
pub use row::{DetectionRow, Recyclability};
