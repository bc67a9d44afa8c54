//! Modelo de CheckoutPayment
//!
//! Intento de cobro contra un proveedor externo (M-Pesa o Stripe).
//! Es independiente del libro de pagos del taller: aquí se registra el
//! ciclo PENDING → COMPLETED/FAILED de cada intento.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::record_store::Record;

pub const CHECKOUT_ID_PREFIX: &str = "TXN";

/// Método del intento de cobro
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckoutMethod {
    Mpesa,
    Card,
}

/// Estado del intento de cobro
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckoutStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayment {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub method: CheckoutMethod,
    pub status: CheckoutStatus,
    // Recibo M-Pesa o id del PaymentIntent de Stripe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for CheckoutPayment {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.currency.clone(),
            self.transaction_id.clone().unwrap_or_default(),
            self.phone_number.clone().unwrap_or_default(),
        ]
    }
}
