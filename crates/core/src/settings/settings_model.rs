//! Settings domain models.
//!
//! A `Setting` carries one typed value column per data type; which column is
//! live is selected by `data_type`. Incoming update values arrive as raw JSON
//! and are converted into a [`SettingValue`] before they reach storage.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Discriminator for the typed value columns of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingDataType {
    String,
    Text,
    Integer,
    Float,
    Timestamp,
}

impl SettingDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingDataType::String => "string",
            SettingDataType::Text => "text",
            SettingDataType::Integer => "integer",
            SettingDataType::Float => "float",
            SettingDataType::Timestamp => "timestamp",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(SettingDataType::String),
            "text" => Ok(SettingDataType::Text),
            "integer" => Ok(SettingDataType::Integer),
            "float" => Ok(SettingDataType::Float),
            "timestamp" => Ok(SettingDataType::Timestamp),
            other => Err(ValidationError::UnknownDataType(other.to_string()).into()),
        }
    }
}

/// Domain model for an application setting.
///
/// Wire field names match the legacy API: snake_case column names, all typed
/// value fields present with only the active one populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Setting {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub data_type: SettingDataType,
    pub string_value: Option<String>,
    pub text_value: Option<String>,
    pub integer_value: Option<i64>,
    pub float_value: Option<f64>,
    pub timestamp_value: Option<NaiveDateTime>,
}

/// Update payload for the setting update endpoint: optional rename plus a raw
/// value interpreted according to `data_type`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingUpdate {
    pub name: Option<String>,
    pub value: serde_json::Value,
    pub data_type: SettingDataType,
}

/// A setting value converted into its declared type.
///
/// Exactly one variant per `data_type`; conversion is explicit per variant so
/// a malformed value fails with a validation error instead of being stored
/// under the wrong column.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
}

impl SettingValue {
    /// Convert a raw JSON value into the variant selected by `data_type`.
    ///
    /// Numeric types accept both JSON numbers and numeric strings, matching
    /// what the legacy UI submits. Timestamps accept RFC 3339 strings only
    /// and are normalized to naive UTC.
    pub fn convert(data_type: SettingDataType, raw: &serde_json::Value) -> Result<SettingValue> {
        match data_type {
            SettingDataType::String => Ok(SettingValue::String(as_string(raw)?)),
            SettingDataType::Text => Ok(SettingValue::Text(as_string(raw)?)),
            SettingDataType::Integer => {
                if let Some(n) = raw.as_i64() {
                    return Ok(SettingValue::Integer(n));
                }
                let s = as_string(raw)?;
                let n = s
                    .trim()
                    .parse::<i64>()
                    .map_err(ValidationError::IntParse)?;
                Ok(SettingValue::Integer(n))
            }
            SettingDataType::Float => {
                if let Some(f) = raw.as_f64() {
                    return Ok(SettingValue::Float(f));
                }
                let s = as_string(raw)?;
                let f = s
                    .trim()
                    .parse::<f64>()
                    .map_err(ValidationError::FloatParse)?;
                Ok(SettingValue::Float(f))
            }
            SettingDataType::Timestamp => {
                let s = as_string(raw)?;
                let ts = DateTime::parse_from_rfc3339(s.trim())
                    .map_err(ValidationError::TimestampParse)?;
                Ok(SettingValue::Timestamp(ts.naive_utc()))
            }
        }
    }

    pub fn data_type(&self) -> SettingDataType {
        match self {
            SettingValue::String(_) => SettingDataType::String,
            SettingValue::Text(_) => SettingDataType::Text,
            SettingValue::Integer(_) => SettingDataType::Integer,
            SettingValue::Float(_) => SettingDataType::Float,
            SettingValue::Timestamp(_) => SettingDataType::Timestamp,
        }
    }
}

fn as_string(raw: &serde_json::Value) -> Result<String> {
    match raw {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(ValidationError::InvalidInput(format!(
            "expected a string or number, got {other}"
        ))
        .into()),
    }
}
