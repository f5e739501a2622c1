//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de formularios, compartidas por el flujo de reserva y el CRUD
//! administrativo de coches.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a fecha de calendario
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar formato de teléfono: al menos 10 dígitos, máximo 15
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 10 || digits > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el año de fabricación de un coche
pub fn validate_year(value: i32) -> Result<(), ValidationError> {
    let next_year = Utc::now().year() + 1;
    if value < 1950 || value > next_year {
        let mut error = ValidationError::new("year");
        error.add_param("value".into(), &value);
        error.add_param("max".into(), &next_year);
        return Err(error);
    }
    Ok(())
}
