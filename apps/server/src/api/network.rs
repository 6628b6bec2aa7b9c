use std::collections::HashMap;
use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use cmhub_core::datatable::{self, Column, DataTablePage, DataTableParams};
use cmhub_core::network::{NewVendorTech, VendorTechEntry};

const VENDOR_TECH_COLUMNS: &[Column] = &[
    Column::new("pk"),
    Column::new("vendor"),
    Column::new("technology"),
];

async fn get_vendor_technologies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<VendorTechEntry>>> {
    let entries = state.vendor_tech_service.get_entries()?;
    Ok(Json(entries))
}

async fn get_vendor_technologies_datatable(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<DataTablePage>> {
    let entries = state.vendor_tech_service.get_entries()?;
    let params = DataTableParams::from_query(&query);
    let page = datatable::paginate(&entries, VENDOR_TECH_COLUMNS, &params)?;
    Ok(Json(page))
}

async fn add_vendor_technology(
    State(state): State<Arc<AppState>>,
    Json(new_pair): Json<NewVendorTech>,
) -> ApiResult<Json<serde_json::Value>> {
    state.vendor_tech_service.create(new_pair).await?;
    Ok(Json(json!({ "status": "success" })))
}

async fn delete_vendor_technology(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    state.vendor_tech_service.delete(id).await?;
    Ok(Json(json!({ "status": "success" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/network/technologies",
            get(get_vendor_technologies).post(add_vendor_technology),
        )
        .route(
            "/network/technologies/dt",
            get(get_vendor_technologies_datatable),
        )
        .route("/network/technologies/{id}", delete(delete_vendor_technology))
}
