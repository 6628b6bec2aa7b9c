use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{DatabaseError, Error, Result};
use crate::settings::{Setting, SettingUpdate, SettingValue, SettingsRepositoryTrait};

/// Service trait for settings operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Vec<Setting>>;

    fn get_setting_by_id(&self, setting_id: i32) -> Result<Option<Setting>>;

    fn get_setting_by_name(&self, setting_name: &str) -> Result<Option<Setting>>;

    fn get_settings_by_category(&self, category_id: i32) -> Result<Vec<Setting>>;

    /// Update one setting's value (and optionally its name).
    ///
    /// Fails with a not-found error when the id does not resolve, and with a
    /// validation error when the raw value cannot be converted to the
    /// declared data type.
    async fn update_setting(&self, setting_id: i32, update: SettingUpdate) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Vec<Setting>> {
        self.settings_repository.list()
    }

    fn get_setting_by_id(&self, setting_id: i32) -> Result<Option<Setting>> {
        self.settings_repository.find_by_id(setting_id)
    }

    fn get_setting_by_name(&self, setting_name: &str) -> Result<Option<Setting>> {
        self.settings_repository.find_by_name(setting_name)
    }

    fn get_settings_by_category(&self, category_id: i32) -> Result<Vec<Setting>> {
        self.settings_repository.list_by_category(category_id)
    }

    async fn update_setting(&self, setting_id: i32, update: SettingUpdate) -> Result<()> {
        let existing = self
            .settings_repository
            .find_by_id(setting_id)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "setting {setting_id} does not exist"
                )))
            })?;

        let value = SettingValue::convert(update.data_type, &update.value)?;
        debug!(
            "Updating setting {} ({}) as {}",
            setting_id,
            existing.name,
            update.data_type.as_str()
        );

        self.settings_repository
            .update(setting_id, update.name, value)
            .await
    }
}
