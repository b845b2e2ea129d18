use std::sync::Arc;

use crate::{gateway::PaymentGateway, store::CatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub gateway: Arc<dyn PaymentGateway>,
    /// ISO currency code sent with every payment authorization.
    pub currency: String,
}

impl AppState {
    pub fn new(
        store: CatalogStore,
        gateway: Arc<dyn PaymentGateway>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            currency: currency.into(),
        }
    }
}
