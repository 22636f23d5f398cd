use crate::prelude::{DashboardError, DashboardResult};
use crate::record::{CarbonValue, Recyclability, RecyclableFlag};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A `timePeriod` as shown (sender's wall clock) and as ordered (UTC instant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    pub wall: NaiveDateTime,
    pub instant: DateTime<Utc>,
}

impl ParsedTimestamp {
    fn naive(wall: NaiveDateTime) -> Self {
        Self {
            wall,
            instant: wall.and_utc(),
        }
    }
}

/// Parses the API's `timePeriod`.
///
/// Timestamps without an offset are read as UTC for ordering.
pub fn parse_timestamp(value: &str) -> DashboardResult<ParsedTimestamp> {
    let trimmed = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ParsedTimestamp {
            wall: with_offset.naive_local(),
            instant: with_offset.with_timezone(&Utc),
        });
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ParsedTimestamp::naive(parsed));
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(ParsedTimestamp::naive)
        .ok_or_else(|| DashboardError::InvalidTimestamp(value.to_string()))
}

/// Splits a timestamp into its `YYYY-MM-DD` date and `HH:MM` time strings.
pub fn split_timestamp(timestamp: &NaiveDateTime) -> (String, String) {
    (
        timestamp.format("%Y-%m-%d").to_string(),
        timestamp.format("%H:%M").to_string(),
    )
}

/// Only `true` and the number 1 count as recyclable.
pub fn recyclability(flag: Option<&RecyclableFlag>) -> Recyclability {
    match flag {
        Some(RecyclableFlag::Bool(true)) => Recyclability::Recyclable,
        Some(RecyclableFlag::Number(value)) if *value == 1.0 => Recyclability::Recyclable,
        _ => Recyclability::NotRecyclable,
    }
}

/// Numeric carbon value; unparseable input yields NaN.
pub fn carbon_amount(value: Option<&CarbonValue>) -> f64 {
    match value {
        Some(CarbonValue::Number(number)) => *number,
        Some(CarbonValue::Text(text)) => parse_float_prefix(text),
        Some(CarbonValue::Other(_)) | None => f64::NAN,
    }
}

/// Two-decimal rendering of a carbon value.
pub fn format_carbon(value: Option<&CarbonValue>) -> String {
    to_fixed_2(carbon_amount(value))
}

/// Two-decimal fixed notation where exact halves round away from zero.
///
/// Only odd multiples of 1/8 sit exactly on a half-hundredth, so those are
/// rounded by hand; every other value is already rounded correctly by `{:.2}`.
fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if magnitude >= 1e21 {
        let exponent = format!("{:e}", magnitude);
        return format!("{}{}", sign, exponent.replacen('e', "e+", 1));
    }

    let eighths = magnitude * 8.0;
    let digits = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let hundredths = (eighths * 12.5).ceil() as u64;
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    } else {
        format!("{:.2}", magnitude)
    };
    format!("{}{}", sign, digits)
}

/// Reads the longest leading decimal literal, ignoring trailing text.
fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        if mantissa_digits > 0 {
            end = cursor;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_naive_and_offset_timestamps() {
        let naive = parse_timestamp("2024-11-02T09:15:30").unwrap().wall;
        assert_eq!((naive.hour(), naive.minute()), (9, 15));

        let fractional = parse_timestamp("2024-11-02 09:15:30.125").unwrap().wall;
        assert_eq!(fractional.second(), 30);

        let offset = parse_timestamp("2024-11-02T23:50:00+09:00").unwrap();
        assert_eq!((offset.wall.day(), offset.wall.hour()), (2, 23));
        assert_eq!((offset.instant.day(), offset.instant.hour()), (2, 14));

        let date_only = parse_timestamp("2024-11-02").unwrap().wall;
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(DashboardError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn splits_into_date_and_minutes() {
        let ts = parse_timestamp("2023-01-05T07:03:59").unwrap();
        assert_eq!(
            split_timestamp(&ts.wall),
            ("2023-01-05".to_string(), "07:03".to_string())
        );
    }

    #[test]
    fn recyclability_accepts_only_true_or_one() {
        assert_eq!(
            recyclability(Some(&RecyclableFlag::Bool(true))),
            Recyclability::Recyclable
        );
        assert_eq!(
            recyclability(Some(&RecyclableFlag::Number(1.0))),
            Recyclability::Recyclable
        );
        assert_eq!(
            recyclability(Some(&RecyclableFlag::Number(0.0))),
            Recyclability::NotRecyclable
        );
        assert_eq!(
            recyclability(Some(&RecyclableFlag::Text("1".into()))),
            Recyclability::NotRecyclable
        );
        assert_eq!(recyclability(None), Recyclability::NotRecyclable);
        assert_eq!(Recyclability::Recyclable.label(), "가능");
        assert_eq!(Recyclability::NotRecyclable.label(), "불가능");
    }

    #[test]
    fn carbon_is_rendered_with_two_decimals() {
        assert_eq!(format_carbon(Some(&CarbonValue::Number(1.0))), "1.00");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(0.4567))), "0.46");
        assert_eq!(format_carbon(Some(&CarbonValue::Text("3.14159".into()))), "3.14");
        assert_eq!(format_carbon(Some(&CarbonValue::Text(" 12.5kg".into()))), "12.50");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_carbon(Some(&CarbonValue::Number(0.125))), "0.13");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(0.625))), "0.63");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(2.375))), "2.38");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(-0.125))), "-0.13");
        // 1.3125 is two hundredths-and-a-quarter, not a half
        assert_eq!(format_carbon(Some(&CarbonValue::Number(1.3125))), "1.31");
        // 1.005 is stored just below the half
        assert_eq!(format_carbon(Some(&CarbonValue::Number(1.005))), "1.00");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(0.25))), "0.25");
    }

    #[test]
    fn special_values_render_like_fixed_notation() {
        assert_eq!(format_carbon(Some(&CarbonValue::Text("Infinity".into()))), "Infinity");
        assert_eq!(format_carbon(Some(&CarbonValue::Text("-Infinity".into()))), "-Infinity");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(-0.0))), "0.00");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(-0.001))), "-0.00");
        assert_eq!(format_carbon(Some(&CarbonValue::Number(1.5e21))), "1.5e+21");
        assert_eq!(
            format_carbon(Some(&CarbonValue::Other(serde_json::Value::Bool(true)))),
            "NaN"
        );
    }

    #[test]
    fn malformed_carbon_becomes_nan() {
        assert_eq!(format_carbon(Some(&CarbonValue::Text("n/a".into()))), "NaN");
        assert_eq!(format_carbon(None), "NaN");
        assert!(carbon_amount(Some(&CarbonValue::Text(".".into()))).is_nan());
    }

    #[test]
    fn float_prefix_handles_exponents_and_signs() {
        assert_eq!(parse_float_prefix("-2.5e2xyz"), -250.0);
        assert_eq!(parse_float_prefix("7e"), 7.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
    }
}
