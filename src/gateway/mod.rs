use async_trait::async_trait;
use thiserror::Error;

pub mod stripe;

pub use stripe::StripeGateway;

/// Charge authorization sent to the processor. `amount` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No API key provided. Set STRIPE_SECRET_KEY to enable checkout.")]
    MissingApiKey,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Payment gateway unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected payment gateway response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError>;
}
