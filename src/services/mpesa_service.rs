//! Servicio M-Pesa (Daraja)
//!
//! Obtención del token OAuth y disparo del STK push. El password del
//! push es base64(shortcode + passkey + timestamp) con timestamp local
//! en formato YYYYMMDDHHMMSS, según la API de Daraja.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{AppError, AppResult};

pub struct MpesaService {
    config: EnvironmentConfig,
    http_client: Client,
}

impl MpesaService {
    pub fn new(config: EnvironmentConfig, http_client: Client) -> Self {
        Self { config, http_client }
    }

    async fn get_access_token(&self) -> AppResult<String> {
        let consumer_key = self
            .config
            .mpesa_consumer_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Missing M-Pesa environment variables".to_string()))?;
        let consumer_secret = self
            .config
            .mpesa_consumer_secret
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Missing M-Pesa environment variables".to_string()))?;

        let url = format!(
            "{}/oauth/v1/generate?grant_type=client_credentials",
            self.config.mpesa_api_url
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(consumer_key, Some(consumer_secret))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error getting M-Pesa token: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "M-Pesa OAuth endpoint returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid M-Pesa OAuth response: {}", e)))?;

        payload
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::ExternalApi("M-Pesa OAuth response without access_token".to_string()))
    }

    /// Disparar el STK push hacia el teléfono del cliente
    pub async fn trigger_stk_push(
        &self,
        phone_number: &str,
        amount: i64,
        payment_id: &str,
    ) -> AppResult<serde_json::Value> {
        let access_token = self.get_access_token().await?;

        let business_shortcode = self
            .config
            .mpesa_business_shortcode
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Missing M-Pesa environment variables".to_string()))?;
        let passkey = self
            .config
            .mpesa_passkey
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Missing M-Pesa environment variables".to_string()))?;

        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
        let password = BASE64.encode(format!("{}{}{}", business_shortcode, passkey, timestamp));

        let payload = json!({
            "BusinessShortCode": business_shortcode,
            "Password": password,
            "Timestamp": timestamp,
            "TransactionType": "CustomerPayBillOnline",
            "Amount": amount,
            "PartyA": phone_number,
            "PartyB": business_shortcode,
            "PhoneNumber": phone_number,
            "CallBackURL": self.config.mpesa_callback_url,
            "AccountReference": format!("Payment-{}", payment_id),
            "TransactionDesc": "Payment for Service",
        });

        debug!("📲 STK push hacia {} por {}", phone_number, amount);

        let url = format!("{}/mpesa/stkpush/v1/processrequest", self.config.mpesa_api_url);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error triggering STK push: {}", e)))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid STK push response: {}", e)))?;

        info!("📲 Respuesta STK push: {}", body);
        Ok(body)
    }
}
