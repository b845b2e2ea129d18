use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::MessageResponse, state::AppState};

pub mod cart;
pub mod checkout;
pub mod doc;
pub mod health;
pub mod items;
pub mod params;

// Build the router without binding state; it will be provided at the top level.
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(items::router())
        .merge(cart::router())
        .merge(checkout::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<MessageResponse>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not Found")))
}
