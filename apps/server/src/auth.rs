//! Bearer-token gate for the settings routes.
//!
//! Session management proper lives in the fronting gateway; this layer only
//! checks the shared token so the service is not left open when deployed
//! standalone. With no token configured every request passes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::main_lib::AppState;

pub struct AuthManager {
    token: String,
}

impl AuthManager {
    pub fn new(token: &str) -> Self {
        AuthManager {
            token: token.to_string(),
        }
    }

    pub fn verify_bearer(&self, header_value: Option<&str>) -> bool {
        match header_value.and_then(|v| v.strip_prefix("Bearer ")) {
            Some(candidate) => candidate == self.token,
            None => false,
        }
    }
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(auth) = &state.auth else {
        return Ok(next.run(request).await);
    };

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if auth.verify_bearer(header_value) {
        Ok(next.run(request).await)
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}
