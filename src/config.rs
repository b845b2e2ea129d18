use std::{env, time::Duration};

const DEFAULT_DATABASE_URL: &str = "sqlite://shopping_cart.db?mode=rwc";
const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub payment: PaymentConfig,
}

/// Settings for the outbound payment processor.
#[derive(Clone)]
pub struct PaymentConfig {
    pub secret_key: Option<String>,
    pub api_base: String,
    pub currency: String,
    pub timeout: Duration,
}

// Keep the secret key out of logs.
impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
            payment: PaymentConfig::from_env()?,
        })
    }
}

impl PaymentConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_base = env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let currency = env::var("PAYMENT_CURRENCY")
            .unwrap_or_else(|_| "usd".to_string())
            .to_lowercase();
        let timeout_secs = match env::var("PAYMENT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("invalid PAYMENT_TIMEOUT_SECS {raw:?}: {e}"))?,
            Err(_) => 10,
        };

        if secret_key.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY is not set; checkout requests will be refused");
        }

        Ok(Self {
            secret_key,
            api_base,
            currency,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
