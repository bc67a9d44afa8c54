//! Modelo de Payment
//!
//! Pago registrado contra una factura. `invoice_id` es texto libre sin
//! integridad referencial contra el listado de facturas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::record_store::Record;

pub const PAYMENT_ID_PREFIX: &str = "PAY";

pub const PAYMENT_PAGE_SIZE: usize = 5;

/// Método de pago del registro contable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Check,
    Cash,
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit Card" => Ok(PaymentMethod::CreditCard),
            "Bank Transfer" => Ok(PaymentMethod::BankTransfer),
            "Check" => Ok(PaymentMethod::Check),
            "Cash" => Ok(PaymentMethod::Cash),
            "Other" => Ok(PaymentMethod::Other),
            _ => Err(()),
        }
    }
}

/// Pago del libro de pagos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub amount: Decimal,
    pub date: String,
    pub method: PaymentMethod,
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.invoice_id.clone(),
            self.amount.to_string(),
            self.date.clone(),
            self.method.to_string(),
        ]
    }
}
