/// Raw labels as the bin detector emits them: a color/kind, optionally with
/// an underscore and `+`-joined contamination/composite markers.
pub const RAW_BOTTLE_LABELS: [&str; 10] = [
    "갈색병",
    "갈색병_오염",
    "초록병",
    "초록병+복합",
    "흰색병",
    "흰색_병",
    "흰색병+오염+복합",
    "유리병",
    "유리병_+오염",
    "plastic",
];

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Per-bottle carbon saving used to derive `totalCarbonReduction`.
pub const CARBON_PER_BOTTLE_KG: f64 = 0.0634;

pub fn video_name(prefix: &str, index: usize) -> String {
    format!("{}_{:04}.mp4", prefix, index)
}
