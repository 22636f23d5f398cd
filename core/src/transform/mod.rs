pub mod bottle;
pub mod day;
pub mod normalize;

pub use bottle::{bucket_bottle_type, BottleType};
pub use day::localize_day;

use crate::prelude::DashboardResult;
use crate::record::{CountValue, DetectionRow, RawDetection};
use crate::telemetry::log::LogManager;

/// Builds a presentation row from one raw record.
pub fn transform_record(raw: &RawDetection) -> DashboardResult<DetectionRow> {
    let parsed = normalize::parse_timestamp(&raw.time_period)?;
    let (date, time) = normalize::split_timestamp(&parsed.wall);

    Ok(DetectionRow {
        timestamp: parsed.wall,
        instant: parsed.instant,
        day_of_week: localize_day(&raw.day_of_week),
        bottle_type: bucket_bottle_type(raw.bottle_type.as_deref()),
        recyclable: normalize::recyclability(raw.recyclable.as_ref()),
        video_name: raw.video_name.clone(),
        total_count: raw
            .total_count
            .as_ref()
            .map(CountValue::display)
            .unwrap_or_default(),
        date,
        time,
        total_carbon_reduction: normalize::format_carbon(raw.total_carbon_reduction.as_ref()),
    })
}

/// Normalizes a fetched batch and orders it oldest first by absolute instant.
/// Rows with equal instants keep their fetched order.
///
/// A single unparseable timestamp fails the whole batch.
pub fn transform_records(raw: &[RawDetection]) -> DashboardResult<Vec<DetectionRow>> {
    let mut rows = raw
        .iter()
        .map(transform_record)
        .collect::<DashboardResult<Vec<_>>>()?;
    rows.sort_by_key(|row| row.instant);

    LogManager::new().record(&format!("Transformed {} detection records", rows.len()));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CarbonValue, Recyclability, RecyclableFlag};

    fn raw(time_period: &str, day: &str, bottle: &str) -> RawDetection {
        RawDetection {
            time_period: time_period.into(),
            day_of_week: day.into(),
            bottle_type: Some(bottle.into()),
            recyclable: Some(RecyclableFlag::Number(1.0)),
            video_name: "bin-03.mp4".into(),
            total_count: Some(CountValue::Integer(2)),
            total_carbon_reduction: Some(CarbonValue::Text("0.256".into())),
        }
    }

    #[test]
    fn transform_maps_every_field() {
        let row = transform_record(&raw("2024-03-09T14:05:00", "Saturday", "유리병_+오염")).unwrap();
        assert_eq!(row.day_of_week, "토요일");
        assert_eq!(row.bottle_type, Some(BottleType::Glass));
        assert_eq!(row.recyclable, Recyclability::Recyclable);
        assert_eq!(row.date, "2024-03-09");
        assert_eq!(row.time, "14:05");
        assert_eq!(row.total_carbon_reduction, "0.26");
        assert_eq!(row.video_name, "bin-03.mp4");
        assert_eq!(row.total_count, "2");
    }

    #[test]
    fn odd_payload_values_still_produce_a_row() {
        let records: Vec<RawDetection> = serde_json::from_str(
            r#"[{"timePeriod":"2024-03-09T14:05:00","dayOfWeek":null,"bottleType":7,
                 "recyclable":"1","videoName":null,"totalCount":"3",
                 "totalCarbonReduction":true}]"#,
        )
        .unwrap();
        let rows = transform_records(&records).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day_of_week, "");
        assert_eq!(rows[0].bottle_type, None);
        assert_eq!(rows[0].recyclable, Recyclability::NotRecyclable);
        assert_eq!(rows[0].total_count, "3");
        assert_eq!(rows[0].total_carbon_reduction, "NaN");
    }

    #[test]
    fn rows_are_sorted_oldest_first() {
        let records = vec![
            raw("2024-05-01T10:00:00", "Wednesday", "갈색병"),
            raw("2023-12-31T23:59:00", "Sunday", "초록병"),
            raw("2024-01-15T08:30:00", "Monday", "흰색병"),
        ];
        let rows = transform_records(&records).unwrap();
        let dates: Vec<_> = rows.iter().map(|row| row.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-01-15", "2024-05-01"]);
    }

    #[test]
    fn offsets_order_by_instant_but_display_wall_clock() {
        let records = vec![
            raw("2024-01-01T05:00:00+00:00", "Monday", "갈색병"),
            raw("2024-01-01T09:00:00+09:00", "Monday", "초록병"),
        ];
        let rows = transform_records(&records).unwrap();
        let times: Vec<_> = rows.iter().map(|row| row.time.as_str()).collect();
        assert_eq!(times, vec!["09:00", "05:00"]);
    }

    #[test]
    fn equal_timestamps_keep_fetched_order() {
        let mut first = raw("2024-02-02T12:00:00", "Friday", "갈색병");
        first.video_name = "first.mp4".into();
        let mut second = raw("2024-02-02T12:00:00", "Friday", "갈색병");
        second.video_name = "second.mp4".into();
        let earlier = raw("2024-02-01T12:00:00", "Thursday", "갈색병");

        let rows = transform_records(&[first, second, earlier]).unwrap();
        let videos: Vec<_> = rows.iter().map(|row| row.video_name.as_str()).collect();
        assert_eq!(videos, vec!["bin-03.mp4", "first.mp4", "second.mp4"]);
    }

    #[test]
    fn source_records_are_left_untouched() {
        let records = vec![raw("2024-05-01T10:00:00", "Wednesday", "갈색병")];
        let before = records.clone();
        transform_records(&records).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn bad_timestamp_fails_the_batch() {
        let records = vec![
            raw("2024-05-01T10:00:00", "Wednesday", "갈색병"),
            raw("not a date", "Sunday", "초록병"),
        ];
        assert!(transform_records(&records).is_err());
    }
}
