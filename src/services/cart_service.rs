use crate::{
    dto::cart::{AddToCartRequest, UpdateQuantityRequest},
    error::{AppError, AppResult},
    response::{CartTotalResponse, MessageResponse},
    services::checkout_service::to_minor_units,
    state::AppState,
    store::IncrementOutcome,
};

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<MessageResponse> {
    match state
        .store
        .increment_quantity(payload.id, payload.quantity)
        .await?
    {
        IncrementOutcome::Applied => {
            tracing::info!(item_id = payload.id, delta = payload.quantity, "cart quantity changed");
            Ok(MessageResponse::new("Item added to cart"))
        }
        IncrementOutcome::NotFound => Err(AppError::item_not_found()),
        IncrementOutcome::WouldGoNegative => Err(AppError::BadRequest(
            "quantity cannot go below zero".to_string(),
        )),
        IncrementOutcome::WouldOverflow => Err(AppError::BadRequest(format!(
            "quantity cannot exceed {}",
            i32::MAX
        ))),
    }
}

pub async fn update_quantity(
    state: &AppState,
    payload: UpdateQuantityRequest,
) -> AppResult<MessageResponse> {
    if payload.quantity < 0 {
        return Err(AppError::BadRequest(
            "quantity must not be negative".to_string(),
        ));
    }

    if !state.store.set_quantity(payload.id, payload.quantity).await? {
        return Err(AppError::item_not_found());
    }
    tracing::info!(item_id = payload.id, quantity = payload.quantity, "cart quantity set");

    Ok(MessageResponse::new("Quantity updated"))
}

/// Cart value rounded to the nearest cent.
pub async fn cart_total(state: &AppState) -> AppResult<CartTotalResponse> {
    let total = state.store.cart_total().await?;
    Ok(CartTotalResponse {
        total: to_minor_units(total) as f64 / 100.0,
    })
}
