//! Modelo de Invoice
//!
//! Factura emitida a un cliente del taller. El monto se almacena como
//! `Decimal`; la conversión desde el buffer de texto del formulario
//! ocurre en el DTO de entrada.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::record_store::Record;

pub const INVOICE_ID_PREFIX: &str = "INV";

pub const INVOICE_PAGE_SIZE: usize = 5;

/// Estado de la factura
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(InvoiceStatus::Paid),
            "Pending" => Ok(InvoiceStatus::Pending),
            "Overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(()),
        }
    }
}

/// Factura
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub client: String,
    pub amount: Decimal,
    pub date: String,
    pub due_date: String,
    pub description: String,
    pub status: InvoiceStatus,
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.client.clone(),
            self.amount.to_string(),
            self.date.clone(),
            self.due_date.clone(),
            self.status.to_string(),
            self.description.clone(),
        ]
    }
}
