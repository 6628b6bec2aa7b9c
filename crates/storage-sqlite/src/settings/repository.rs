use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::model::SettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::settings::dsl::*;
use cmhub_core::errors::Result;
use cmhub_core::settings::{Setting, SettingValue, SettingsRepositoryTrait};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn list(&self) -> Result<Vec<Setting>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = settings
            .load::<SettingDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(SettingDB::into_domain).collect()
    }

    fn find_by_id(&self, setting_id: i32) -> Result<Option<Setting>> {
        let mut conn = get_connection(&self.pool)?;
        let row = settings
            .find(setting_id)
            .first::<SettingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(SettingDB::into_domain).transpose()
    }

    fn find_by_name(&self, setting_name: &str) -> Result<Option<Setting>> {
        let mut conn = get_connection(&self.pool)?;
        let row = settings
            .filter(name.eq(setting_name))
            .first::<SettingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(SettingDB::into_domain).transpose()
    }

    fn list_by_category(&self, category: i32) -> Result<Vec<Setting>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = settings
            .filter(category_id.eq(category))
            .load::<SettingDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(SettingDB::into_domain).collect()
    }

    async fn update(
        &self,
        setting_id: i32,
        new_name: Option<String>,
        value: SettingValue,
    ) -> Result<()> {
        self.writer
            .exec(move |conn| {
                if let Some(n) = new_name {
                    diesel::update(settings.find(setting_id))
                        .set(name.eq(n))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                // One typed column per variant; the others stay untouched.
                let updated = match value {
                    SettingValue::String(v) => diesel::update(settings.find(setting_id))
                        .set(string_value.eq(v))
                        .execute(conn),
                    SettingValue::Text(v) => diesel::update(settings.find(setting_id))
                        .set(text_value.eq(v))
                        .execute(conn),
                    SettingValue::Integer(v) => diesel::update(settings.find(setting_id))
                        .set(integer_value.eq(v))
                        .execute(conn),
                    SettingValue::Float(v) => diesel::update(settings.find(setting_id))
                        .set(float_value.eq(v))
                        .execute(conn),
                    SettingValue::Timestamp(v) => diesel::update(settings.find(setting_id))
                        .set(timestamp_value.eq(v))
                        .execute(conn),
                };
                updated.map_err(StorageError::from)?;

                Ok(())
            })
            .await
    }
}
