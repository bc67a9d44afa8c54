//! DTOs de Invoice
//!
//! Campos requeridos: client, amount, date y dueDate. El monto llega como
//! buffer de texto y se parsea a Decimal en el submit; la descripción es
//! opcional.

use serde::Deserialize;
use std::str::FromStr;

use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{parse_amount, require_text};

fn default_status() -> String {
    "Pending".to_string()
}

/// Borrador del formulario de alta/edición
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl InvoiceDraft {
    pub fn into_record(self, id: String) -> AppResult<Invoice> {
        let client = require_text("client", &self.client)?;
        let amount = parse_amount("amount", &self.amount)?;
        let date = require_text("date", &self.date)?;
        let due_date = require_text("dueDate", &self.due_date)?;
        let status = InvoiceStatus::from_str(self.status.trim())
            .map_err(|_| validation_error("status", "must be one of Paid, Pending, Overdue"))?;

        Ok(Invoice {
            id,
            client,
            amount,
            date,
            due_date,
            description: self.description.trim().to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            client: "Acme Corp".to_string(),
            amount: "1200.50".to_string(),
            date: "2024-07-15".to_string(),
            due_date: "2024-08-15".to_string(),
            description: "Web Development Services".to_string(),
            status: "Paid".to_string(),
        }
    }

    #[test]
    fn amount_text_buffer_parses_to_decimal() {
        let invoice = draft().into_record("INV100".to_string()).unwrap();
        assert_eq!(invoice.amount, Decimal::new(120050, 2));
    }

    #[test]
    fn description_is_optional() {
        let mut no_description = draft();
        no_description.description = String::new();
        assert!(no_description.into_record("INV100".to_string()).is_ok());
    }

    #[test]
    fn missing_due_date_is_rejected() {
        let mut incomplete = draft();
        incomplete.due_date = String::new();
        assert!(incomplete.into_record("INV100".to_string()).is_err());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let mut bad = draft();
        bad.amount = "a lot".to_string();
        assert!(bad.into_record("INV100".to_string()).is_err());
    }
}
