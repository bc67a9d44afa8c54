//! DTOs del checkout contra proveedores de cobro

use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "usd".to_string()
}

/// Request de STK push de M-Pesa (teléfono en formato 2547XXXXXXXX)
#[derive(Debug, Deserialize)]
pub struct MpesaPaymentRequest {
    pub amount: i64,
    pub phone_number: String,
}

/// Request de PaymentIntent de Stripe
#[derive(Debug, Deserialize)]
pub struct StripePaymentRequest {
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Response del STK push
#[derive(Debug, Serialize)]
pub struct MpesaPushResponse {
    pub status: String,
    pub message: String,
    pub payment_id: String,
    pub provider_response: serde_json::Value,
}

/// Response del PaymentIntent
#[derive(Debug, Serialize)]
pub struct StripeIntentResponse {
    pub status: String,
    pub client_secret: String,
    pub payment_id: String,
}
