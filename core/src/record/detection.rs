use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recyclability as sent by the API: a boolean, a 1/0 number, or whatever
/// else the backend happens to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecyclableFlag {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(Value),
}

/// Carbon reduction arrives either as a JSON number or as a numeric string.
/// Anything else is kept and later reads as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarbonValue {
    Number(f64),
    Text(String),
    Other(Value),
}

/// `totalCount` is shown verbatim, so any scalar is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl CountValue {
    pub fn display(&self) -> String {
        match self {
            CountValue::Integer(count) => count.to_string(),
            CountValue::Float(count) if count.fract() == 0.0 && count.abs() < 1e21 => {
                format!("{:.0}", count)
            }
            CountValue::Float(count) => count.to_string(),
            CountValue::Text(count) => count.clone(),
            CountValue::Other(_) => String::new(),
        }
    }
}

/// Detection record exactly as returned by `/api/detections/result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDetection {
    pub time_period: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub day_of_week: String,
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recyclable: Option<RecyclableFlag>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub video_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<CountValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_carbon_reduction: Option<CarbonValue>,
}

/// Strings pass through, other scalars use their JSON text, null and
/// containers become `None`.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn scalar_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(optional_scalar(deserializer)?.unwrap_or_default())
}
