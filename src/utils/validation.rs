//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de campos
//! requeridos y parseo de buffers de texto a tipos numéricos de dominio.
//! Los formularios envían los campos numéricos como texto; la conversión
//! a número ocurre únicamente aquí, en el momento del submit.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::utils::errors::{validation_error, AppError};

lazy_static! {
    // Formato M-Pesa: 2547XXXXXXXX
    static ref MPESA_PHONE_RE: Regex = Regex::new(r"^2547\d{8}$").unwrap();
}

/// Validar que un campo requerido no esté vacío; devuelve el valor recortado
pub fn require_text(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation_error(field, "is required and cannot be blank"));
    }
    Ok(trimmed.to_string())
}

/// Parsear un buffer de texto a monto decimal
pub fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation_error(field, "is required and cannot be blank"));
    }
    trimmed
        .parse::<Decimal>()
        .map_err(|_| validation_error(field, "must be a valid decimal amount"))
}

/// Parsear un buffer de texto a cantidad entera (no negativa)
pub fn parse_quantity(field: &'static str, value: &str) -> Result<u32, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation_error(field, "is required and cannot be blank"));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| validation_error(field, "must be a non-negative whole number"))
}

/// Parsear un buffer de texto a año de fabricación
pub fn parse_year(field: &'static str, value: &str) -> Result<i32, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation_error(field, "is required and cannot be blank"));
    }
    let year = trimmed
        .parse::<i32>()
        .map_err(|_| validation_error(field, "must be a valid year"))?;
    if !(1900..=2100).contains(&year) {
        return Err(validation_error(field, "must be between 1900 and 2100"));
    }
    Ok(year)
}

/// Validar formato de teléfono para STK push de M-Pesa
pub fn validate_mpesa_phone(value: &str) -> Result<(), AppError> {
    if MPESA_PHONE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(validation_error("phone_number", "must match the format 2547XXXXXXXX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_blank_values() {
        assert!(require_text("client", "").is_err());
        assert!(require_text("client", "   ").is_err());
        assert_eq!(require_text("client", " Acme Corp ").unwrap(), "Acme Corp");
    }

    #[test]
    fn parse_amount_accepts_decimals_only() {
        assert_eq!(parse_amount("amount", "1200.50").unwrap(), Decimal::new(120050, 2));
        assert!(parse_amount("amount", "").is_err());
        assert!(parse_amount("amount", "abc").is_err());
    }

    #[test]
    fn parse_quantity_rejects_negative_and_garbage() {
        assert_eq!(parse_quantity("quantity", "50").unwrap(), 50);
        assert!(parse_quantity("quantity", "-3").is_err());
        assert!(parse_quantity("quantity", "many").is_err());
    }

    #[test]
    fn parse_year_enforces_range() {
        assert_eq!(parse_year("year", "2022").unwrap(), 2022);
        assert!(parse_year("year", "1850").is_err());
        assert!(parse_year("year", "").is_err());
    }

    #[test]
    fn mpesa_phone_format() {
        assert!(validate_mpesa_phone("254712345678").is_ok());
        assert!(validate_mpesa_phone("0712345678").is_err());
        assert!(validate_mpesa_phone("25471234567").is_err());
    }
}
