use crate::{
    error::AppResult,
    gateway::PaymentIntentRequest,
    response::CheckoutResponse,
    state::AppState,
};

/// Converts a currency amount to minor units, rounding half away from zero
/// (37.97 becomes 3797, never 3796).
pub fn to_minor_units(total: f64) -> i64 {
    (total * 100.0).round() as i64
}

pub async fn checkout(state: &AppState) -> AppResult<CheckoutResponse> {
    let total = state.store.cart_total().await?;
    let request = PaymentIntentRequest {
        amount: to_minor_units(total),
        currency: state.currency.clone(),
    };

    tracing::info!(amount = request.amount, currency = %request.currency, "starting checkout");
    let intent = state.gateway.create_payment_intent(request).await?;

    Ok(CheckoutResponse {
        client_secret: intent.client_secret,
    })
}
