//! DTOs de Vehicle
//!
//! El borrador del formulario llega con todos los campos como texto;
//! `into_record` valida los requeridos y parsea año/estado al dominio.

use serde::Deserialize;
use std::str::FromStr;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{parse_year, require_text};

fn default_status() -> String {
    "Active".to_string()
}

/// Borrador del formulario de alta/edición (todos los campos menos el id)
#[derive(Debug, Deserialize)]
pub struct VehicleDraft {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl VehicleDraft {
    pub fn into_record(self, id: String) -> AppResult<Vehicle> {
        let make = require_text("make", &self.make)?;
        let model = require_text("model", &self.model)?;
        let year = parse_year("year", &self.year)?;
        let vin = require_text("vin", &self.vin)?;
        let status = VehicleStatus::from_str(self.status.trim())
            .map_err(|_| validation_error("status", "must be one of Active, Maintenance, Inactive"))?;

        Ok(Vehicle {
            id,
            make,
            model,
            year,
            vin,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VehicleDraft {
        VehicleDraft {
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            year: "2022".to_string(),
            vin: "1FTBW2CM5NKA10394".to_string(),
            status: "Active".to_string(),
        }
    }

    #[test]
    fn complete_draft_becomes_a_vehicle() {
        let vehicle = draft().into_record("V100".to_string()).unwrap();
        assert_eq!(vehicle.id, "V100");
        assert_eq!(vehicle.year, 2022);
        assert_eq!(vehicle.status, VehicleStatus::Active);
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut incomplete = draft();
        incomplete.vin = "   ".to_string();
        assert!(incomplete.into_record("V100".to_string()).is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut bad = draft();
        bad.status = "Scrapped".to_string();
        assert!(bad.into_record("V100".to_string()).is_err());
    }
}
