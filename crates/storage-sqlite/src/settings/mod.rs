//! SQLite storage implementation for settings.

mod model;
mod repository;

pub use model::SettingDB;
pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use cmhub_core::settings::SettingsRepositoryTrait;
