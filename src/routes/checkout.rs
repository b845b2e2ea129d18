use axum::{Json, Router, extract::State, routing::post};

use crate::{
    error::AppResult,
    response::{CheckoutResponse, ErrorResponse},
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/checkout",
    responses(
        (status = 200, description = "Payment intent created", body = CheckoutResponse),
        (status = 403, description = "Payment gateway refused the charge", body = ErrorResponse),
    ),
    tag = "Checkout"
)]
pub async fn checkout(State(state): State<AppState>) -> AppResult<Json<CheckoutResponse>> {
    let response = checkout_service::checkout(&state).await?;
    Ok(Json(response))
}
