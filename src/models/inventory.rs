//! Modelo de InventoryItem
//!
//! Pieza o consumible del almacén del taller.

use serde::{Deserialize, Serialize};

use crate::store::record_store::Record;

pub const INVENTORY_ID_PREFIX: &str = "P";

pub const INVENTORY_PAGE_SIZE: usize = 5;

/// Artículo de inventario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.location.clone(),
            self.sku.clone().unwrap_or_default(),
            self.quantity.to_string(),
        ]
    }
}
