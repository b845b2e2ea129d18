#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use axum_shopping_cart::{
    db::{create_orm_conn, run_migrations},
    dto::items::NewItem,
    gateway::{GatewayError, PaymentGateway, PaymentIntent, PaymentIntentRequest},
    routes::create_app_router,
    state::AppState,
    store::CatalogStore,
};
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Gateway double that approves every charge and remembers what it was asked for.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    requests: Arc<Mutex<Vec<PaymentIntentRequest>>>,
}

impl RecordingGateway {
    pub async fn requests(&self) -> Vec<PaymentIntentRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        let mut requests = self.requests.lock().await;
        requests.push(request.clone());
        let id = format!("pi_test_{}", requests.len());
        Ok(PaymentIntent {
            client_secret: format!("{id}_secret"),
            id,
            amount: request.amount,
            currency: request.currency,
            status: "requires_payment_method".to_string(),
        })
    }
}

/// Gateway double that declines every charge.
pub struct FailingGateway {
    pub message: String,
}

#[async_trait]
impl PaymentGateway for FailingGateway {
    async fn create_payment_intent(
        &self,
        _request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        Err(GatewayError::Rejected {
            status: 402,
            message: self.message.clone(),
        })
    }
}

pub async fn setup_state(gateway: Arc<dyn PaymentGateway>) -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(CatalogStore::new(orm), gateway, "usd"))
}

pub async fn setup_app(gateway: Arc<dyn PaymentGateway>) -> anyhow::Result<(AppState, Router)> {
    let state = setup_state(gateway).await?;
    let app = create_app_router().with_state(state.clone());
    Ok((state, app))
}

pub fn new_item(id: i64, title: &str, price: f64) -> NewItem {
    NewItem {
        id,
        title: title.to_string(),
        price,
        description: Some("Test".to_string()),
        category: Some("test".to_string()),
        image: Some("test.jpg".to_string()),
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|json| json.to_string());
    send_raw(app, method, uri, raw).await
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}
