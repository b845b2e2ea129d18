use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use super::{GatewayError, PaymentGateway, PaymentIntent, PaymentIntentRequest};
use crate::config::PaymentConfig;

/// PaymentIntents client for the Stripe REST API.
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
    api_base: String,
    secret_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: Option<String>,
    amount: i64,
    currency: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl StripeGateway {
    pub fn new(config: &PaymentConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            secret_key: config.secret_key.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        let secret_key = self.secret_key.as_deref().ok_or(GatewayError::MissingApiKey)?;
        let url = format!("{}/v1/payment_intents", self.api_base);
        let amount = request.amount.to_string();

        tracing::debug!(amount = request.amount, currency = %request.currency, "creating payment intent");
        let response = self
            .client
            .post(&url)
            .bearer_auth(secret_key)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&[("amount", amount.as_str()), ("currency", request.currency.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| {
                    envelope
                        .error
                        .message
                        .or(envelope.error.kind)
                })
                .unwrap_or_else(|| format!("payment gateway returned {status}"));
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let intent: StripePaymentIntent = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let client_secret = intent.client_secret.ok_or_else(|| {
            GatewayError::InvalidResponse("payment intent has no client_secret".to_string())
        })?;

        tracing::info!(intent_id = %intent.id, status = %intent.status, "payment intent created");
        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
        })
    }
}
