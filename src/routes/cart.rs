use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};

use crate::{
    dto::cart::{AddToCartRequest, UpdateQuantityRequest},
    error::AppResult,
    extract::ValidJson,
    response::{CartTotalResponse, MessageResponse},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_to_cart", post(add_to_cart))
        .route("/update_quantity", put(update_quantity))
        .route("/cart_total", get(cart_total))
}

#[utoipa::path(
    post,
    path = "/add_to_cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Quantity incremented", body = MessageResponse),
        (status = 400, description = "Bad request", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AddToCartRequest>,
) -> AppResult<Json<MessageResponse>> {
    let response = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/update_quantity",
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity replaced", body = MessageResponse),
        (status = 400, description = "Bad request", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateQuantityRequest>,
) -> AppResult<Json<MessageResponse>> {
    let response = cart_service::update_quantity(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/cart_total",
    responses(
        (status = 200, description = "Sum of price * quantity", body = CartTotalResponse),
    ),
    tag = "Cart"
)]
pub async fn cart_total(State(state): State<AppState>) -> AppResult<Json<CartTotalResponse>> {
    let response = cart_service::cart_total(&state).await?;
    Ok(Json(response))
}
