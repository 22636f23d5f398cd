use crate::generator::template::{video_name, CARBON_PER_BOTTLE_KG, RAW_BOTTLE_LABELS, WEEKDAYS};
use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate};
use crccore::record::{CarbonValue, CountValue, RawDetection, RecyclableFlag};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic detection records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub records: usize,
    pub seed: u64,
    /// First day covered, `YYYY-MM-DD`.
    pub start_date: String,
    pub span_days: u32,
    pub max_count: u32,
    pub video_prefix: String,
    /// Emit carbon values as strings, as the production backend sometimes does.
    pub carbon_as_text: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 200,
            seed: 0,
            start_date: "2024-01-01".into(),
            span_days: 540,
            max_count: 12,
            video_prefix: "crc_bin".into(),
            carbon_as_text: true,
        }
    }
}

impl GeneratorConfig {
    fn start(&self) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .with_context(|| format!("parsing generator start date {}", self.start_date))
    }
}

pub fn build_detections(config: &GeneratorConfig) -> anyhow::Result<Vec<RawDetection>> {
    let start = config.start()?;
    let span_days = i64::from(config.span_days.max(1));
    let max_count = config.max_count.max(1);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut records = Vec::with_capacity(config.records);
    for index in 0..config.records {
        let day = start
            .checked_add_signed(Duration::days(rng.gen_range(0..span_days)))
            .context("generator date overflow")?;
        let timestamp = day
            .and_hms_opt(rng.gen_range(6..22), rng.gen_range(0..60), rng.gen_range(0..60))
            .context("generator produced an invalid time of day")?;

        let label = RAW_BOTTLE_LABELS[rng.gen_range(0..RAW_BOTTLE_LABELS.len())];
        let recyclable = !label.contains("오염") && label != "plastic";
        let total_count = rng.gen_range(1..=max_count);
        let carbon = if recyclable {
            f64::from(total_count) * CARBON_PER_BOTTLE_KG
        } else {
            0.0
        };

        records.push(RawDetection {
            time_period: timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            day_of_week: WEEKDAYS[day.weekday().num_days_from_monday() as usize].to_string(),
            bottle_type: Some(label.to_string()),
            recyclable: Some(RecyclableFlag::Number(if recyclable { 1.0 } else { 0.0 })),
            video_name: video_name(&config.video_prefix, index),
            total_count: Some(CountValue::Integer(i64::from(total_count))),
            total_carbon_reduction: Some(if config.carbon_as_text {
                CarbonValue::Text(format!("{:.4}", carbon))
            } else {
                CarbonValue::Number(carbon)
            }),
        });
    }

    Ok(records)
}
