use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use cmhub_core::{
    cm::{CmFormatService, CmFormatServiceTrait},
    etl::{EtlTriggerService, EtlTriggerServiceTrait},
    network::{VendorTechService, VendorTechServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
};
use cmhub_storage_sqlite::{
    cm::CmFormatRepository, db, network::VendorTechRepository, settings::SettingsRepository,
};

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub vendor_tech_service: Arc<dyn VendorTechServiceTrait>,
    pub cm_format_service: Arc<dyn CmFormatServiceTrait>,
    pub etl_service: Arc<dyn EtlTriggerServiceTrait>,
    pub db_path: String,
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CMHUB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(settings_repo));

    let vendor_tech_repo = Arc::new(VendorTechRepository::new(pool.clone(), writer.clone()));
    let vendor_tech_service: Arc<dyn VendorTechServiceTrait> =
        Arc::new(VendorTechService::new(vendor_tech_repo.clone()));

    let cm_format_repo = Arc::new(CmFormatRepository::new(pool.clone(), writer.clone()));
    let cm_format_service: Arc<dyn CmFormatServiceTrait> =
        Arc::new(CmFormatService::new(cm_format_repo, vendor_tech_repo));

    let etl_service: Arc<dyn EtlTriggerServiceTrait> =
        Arc::new(EtlTriggerService::new(&config.orchestrator_url));

    let auth = config
        .api_token
        .as_deref()
        .map(AuthManager::new)
        .map(Arc::new);

    Ok(Arc::new(AppState {
        settings_service,
        vendor_tech_service,
        cm_format_service,
        etl_service,
        db_path,
        auth,
    }))
}
