//! DTOs de InventoryItem
//!
//! Campos requeridos: name, quantity y location; el sku es opcional
//! (un sku en blanco se guarda como ausente).

use serde::Deserialize;

use crate::models::inventory::InventoryItem;
use crate::utils::errors::AppResult;
use crate::utils::validation::{parse_quantity, require_text};

/// Borrador del formulario de alta/edición
#[derive(Debug, Deserialize)]
pub struct InventoryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sku: String,
}

impl InventoryDraft {
    pub fn into_record(self, id: String) -> AppResult<InventoryItem> {
        let name = require_text("name", &self.name)?;
        let quantity = parse_quantity("quantity", &self.quantity)?;
        let location = require_text("location", &self.location)?;
        let sku = match self.sku.trim() {
            "" => None,
            value => Some(value.to_string()),
        };

        Ok(InventoryItem {
            id,
            name,
            quantity,
            location,
            sku,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InventoryDraft {
        InventoryDraft {
            name: "Oil Filter".to_string(),
            quantity: "50".to_string(),
            location: "Shelf A1".to_string(),
            sku: "OF-1023".to_string(),
        }
    }

    #[test]
    fn blank_sku_becomes_none() {
        let mut no_sku = draft();
        no_sku.sku = "  ".to_string();
        let item = no_sku.into_record("P100".to_string()).unwrap();
        assert!(item.sku.is_none());
    }

    #[test]
    fn quantity_text_buffer_parses_to_number() {
        let item = draft().into_record("P100".to_string()).unwrap();
        assert_eq!(item.quantity, 50);
    }

    #[test]
    fn missing_location_is_rejected() {
        let mut incomplete = draft();
        incomplete.location = String::new();
        assert!(incomplete.into_record("P100".to_string()).is_err());
    }
}
