//! Settings module - domain models, services, and traits.

mod settings_model;
mod settings_service;
mod settings_traits;

#[cfg(test)]
mod settings_model_tests;

pub use settings_model::{Setting, SettingDataType, SettingUpdate, SettingValue};
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
