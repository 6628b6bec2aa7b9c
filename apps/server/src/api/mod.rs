//! API routers, one module per domain.

mod cm;
mod network;
mod settings;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{auth, main_lib::AppState};

/// Build the full application router under the `/api/settings` prefix.
///
/// Settings CRUD and the vendor/format mapping routes sit behind the auth
/// gate; the vendor/technology routes and the ETL trigger are open, as in
/// the legacy service.
pub fn app_router(state: Arc<AppState>) -> Router {
    let guarded = Router::new()
        .merge(settings::router())
        .merge(cm::guarded_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    let open = Router::new()
        .merge(network::router())
        .merge(cm::open_router());

    Router::new()
        .nest("/api/settings", guarded.merge(open))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
