//! DTOs de Payment
//!
//! Campos requeridos: invoiceId, amount, date y method. El invoiceId es
//! texto libre: no se valida contra las facturas existentes.

use serde::Deserialize;
use std::str::FromStr;

use crate::models::payment::{Payment, PaymentMethod};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{parse_amount, require_text};

/// Borrador del formulario de registro/edición
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    #[serde(default)]
    pub invoice_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub method: String,
}

impl PaymentDraft {
    pub fn into_record(self, id: String) -> AppResult<Payment> {
        let invoice_id = require_text("invoiceId", &self.invoice_id)?;
        let amount = parse_amount("amount", &self.amount)?;
        let date = require_text("date", &self.date)?;
        let method = require_text("method", &self.method)?;
        let method = PaymentMethod::from_str(&method).map_err(|_| {
            validation_error(
                "method",
                "must be one of Credit Card, Bank Transfer, Check, Cash, Other",
            )
        })?;

        Ok(Payment {
            id,
            invoice_id,
            amount,
            date,
            method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PaymentDraft {
        PaymentDraft {
            invoice_id: "INV001".to_string(),
            amount: "1200.50".to_string(),
            date: "2024-07-18".to_string(),
            method: "Credit Card".to_string(),
        }
    }

    #[test]
    fn invoice_id_is_unchecked_free_text() {
        let mut unknown_invoice = draft();
        unknown_invoice.invoice_id = "NOT-AN-INVOICE".to_string();
        assert!(unknown_invoice.into_record("PAY100".to_string()).is_ok());
    }

    #[test]
    fn missing_method_is_rejected() {
        let mut incomplete = draft();
        incomplete.method = String::new();
        assert!(incomplete.into_record("PAY100".to_string()).is_err());
    }

    #[test]
    fn unknown_method_is_rejected() {
        let mut bad = draft();
        bad.method = "Barter".to_string();
        assert!(bad.into_record("PAY100".to_string()).is_err());
    }
}
