//! Shared-secret authorization for the API surface.
//!
//! Every catalog request must present the configured key in the
//! `Authorization` header. This is transport authentication only; the
//! role-based write gate lives in the repository layer and is enforced
//! per-operation against the graph.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::App;

pub async fn require_api_key(
    State(app): State<Arc<App>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if presented.is_empty() || presented != app.api_key {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
