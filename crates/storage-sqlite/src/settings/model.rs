//! Database model for application settings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use cmhub_core::errors::Result;
use cmhub_core::settings::{Setting, SettingDataType};

/// Database model for a setting row. `data_type` is stored as its lowercase
/// string form and parsed on the way out.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingDB {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub data_type: String,
    pub string_value: Option<String>,
    pub text_value: Option<String>,
    pub integer_value: Option<i64>,
    pub float_value: Option<f64>,
    pub timestamp_value: Option<NaiveDateTime>,
}

impl SettingDB {
    /// Convert to the domain model. Fails on a corrupted `data_type` column.
    pub fn into_domain(self) -> Result<Setting> {
        Ok(Setting {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            data_type: SettingDataType::parse(&self.data_type)?,
            string_value: self.string_value,
            text_value: self.text_value,
            integer_value: self.integer_value,
            float_value: self.float_value,
            timestamp_value: self.timestamp_value,
        })
    }
}
