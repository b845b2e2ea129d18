use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain acknowledgement body, also used for client-side errors.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned when an upstream collaborator refused the request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartTotalResponse {
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CheckoutResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
