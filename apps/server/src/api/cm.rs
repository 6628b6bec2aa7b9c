use std::collections::HashMap;
use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use cmhub_core::cm::{CmFileFormat, FormatSelector, NewVendorFormatMapping};
use cmhub_core::datatable::{self, Column, DataTablePage, DataTableParams};

const VENDOR_FORMAT_COLUMNS: &[Column] = &[
    Column::new("pk"),
    Column::new("vendor"),
    Column::new("technology"),
    Column::new("format_name"),
];

async fn get_vendor_format_map_datatable(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<DataTablePage>> {
    let entries = state.cm_format_service.get_entries()?;
    let params = DataTableParams::from_query(&query);
    let page = datatable::paginate(&entries, VENDOR_FORMAT_COLUMNS, &params)?;
    Ok(Json(page))
}

async fn get_vendor_format_map(
    State(state): State<Arc<AppState>>,
    Query(selector): Query<FormatSelector>,
) -> ApiResult<Json<Vec<CmFileFormat>>> {
    let formats = state.cm_format_service.get_formats(selector)?;
    Ok(Json(formats))
}

async fn add_vendor_format_mapping(
    State(state): State<Arc<AppState>>,
    Json(new_mapping): Json<NewVendorFormatMapping>,
) -> ApiResult<Json<serde_json::Value>> {
    state.cm_format_service.create_mapping(new_mapping).await?;
    Ok(Json(json!({ "status": "success" })))
}

async fn delete_vendor_format_mapping(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    state.cm_format_service.delete_mapping(id).await?;
    Ok(Json(json!({ "status": "success" })))
}

async fn run_cm_etl(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    state.etl_service.run().await?;
    Ok(Json(json!({ "status": "success" })))
}

/// Routes behind the auth gate.
pub fn guarded_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/cm/vendor_format_map",
            get(get_vendor_format_map).post(add_vendor_format_mapping),
        )
        .route("/cm/vendor_format_map/dt", get(get_vendor_format_map_datatable))
        .route(
            "/cm/vendor_format_map/{id}",
            delete(delete_vendor_format_mapping),
        )
}

/// Open routes: the ETL trigger has no auth in the legacy service.
pub fn open_router() -> Router<Arc<AppState>> {
    Router::new().route("/cm/run", get(run_cm_etl))
}
