//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del registro de flota
//! y su enum de estado.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::record_store::Record;

/// Prefijo de los ids generados para vehículos
pub const VEHICLE_ID_PREFIX: &str = "V";

/// Tamaño de página del listado de vehículos
pub const VEHICLE_PAGE_SIZE: usize = 10;

/// Estado del vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for VehicleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(VehicleStatus::Active),
            "Maintenance" => Ok(VehicleStatus::Maintenance),
            "Inactive" => Ok(VehicleStatus::Inactive),
            _ => Err(()),
        }
    }
}

/// Vehículo de la flota del taller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub status: VehicleStatus,
}

impl Record for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }

    // Mismo orden de campos que usa el buscador del listado
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            self.vin.clone(),
            self.status.to_string(),
        ]
    }
}
