//! Servicio Stripe
//!
//! Creación de PaymentIntents vía la API REST (form-encoded). El monto
//! se envía en la unidad mínima de la moneda (céntimos).

use reqwest::Client;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{AppError, AppResult};

/// PaymentIntent creado en Stripe
#[derive(Debug)]
pub struct StripeIntent {
    pub id: String,
    pub client_secret: String,
}

pub struct StripeService {
    config: EnvironmentConfig,
    http_client: Client,
}

impl StripeService {
    pub fn new(config: EnvironmentConfig, http_client: Client) -> Self {
        Self { config, http_client }
    }

    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> AppResult<StripeIntent> {
        let secret_key = self
            .config
            .stripe_secret_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Missing Stripe secret key".to_string()))?;

        // Stripe trabaja en la unidad mínima (céntimos)
        let params = [
            ("amount", (amount * 100).to_string()),
            ("currency", currency.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let url = format!("{}/v1/payment_intents", self.config.stripe_api_url);
        let response = self
            .http_client
            .post(&url)
            .basic_auth(secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error creating Stripe intent: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Stripe returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid Stripe response: {}", e)))?;

        let id = payload
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::ExternalApi("Stripe response without intent id".to_string()))?
            .to_string();
        let client_secret = payload
            .get("client_secret")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::ExternalApi("Stripe response without client_secret".to_string()))?
            .to_string();

        info!("💳 PaymentIntent creado: {}", id);
        Ok(StripeIntent { id, client_secret })
    }
}
