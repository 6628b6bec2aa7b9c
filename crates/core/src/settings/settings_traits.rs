//! Repository trait for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::{Setting, SettingValue};

/// Repository trait for reading and mutating application settings.
///
/// Settings are created and destroyed outside this service; only reads and
/// single-row value updates go through here.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// All settings, in stored order.
    fn list(&self) -> Result<Vec<Setting>>;

    /// A single setting by numeric id, if present.
    fn find_by_id(&self, setting_id: i32) -> Result<Option<Setting>>;

    /// A single setting by unique name, if present.
    fn find_by_name(&self, setting_name: &str) -> Result<Option<Setting>>;

    /// All settings in one category.
    fn list_by_category(&self, category_id: i32) -> Result<Vec<Setting>>;

    /// Persist a converted value (and optional rename) for one setting.
    /// Only the value column matching the variant is written.
    async fn update(
        &self,
        setting_id: i32,
        new_name: Option<String>,
        value: SettingValue,
    ) -> Result<()>;
}
