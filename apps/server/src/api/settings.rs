use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use cmhub_core::settings::{Setting, SettingUpdate};

async fn get_all_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Setting>>> {
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

/// Fetch one setting by numeric id or unique name.
///
/// The legacy service registered separate int and string routes on the same
/// path; here one handler tries the id interpretation first. An absent
/// setting serializes as `null` rather than an error.
async fn get_setting(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<Setting>>> {
    let setting = match key.parse::<i32>() {
        Ok(id) => state.settings_service.get_setting_by_id(id)?,
        Err(_) => state.settings_service.get_setting_by_name(&key)?,
    };
    Ok(Json(setting))
}

async fn get_settings_by_category(
    Path(cat_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Setting>>> {
    let settings = state.settings_service.get_settings_by_category(cat_id)?;
    Ok(Json(settings))
}

async fn update_setting(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingUpdate>,
) -> ApiResult<Json<serde_json::Value>> {
    state.settings_service.update_setting(id, update).await?;
    Ok(Json(json!({})))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_settings))
        .route("/{key}", get(get_setting).post(update_setting))
        .route("/category/{cat_id}", get(get_settings_by_category))
}
