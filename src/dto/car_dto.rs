//! DTOs del catálogo de coches

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{FuelType, Transmission};
use crate::utils::validation::{validate_positive, validate_year};

/// Filtros del catálogo; los `None` no se envían
#[derive(Debug, Clone, Default)]
pub struct CarFilters {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub seats: Option<u32>,
    pub available: Option<bool>,
    pub search: Option<String>,
}

impl CarFilters {
    /// Convertir los filtros en pares query-string
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(brand) = &self.brand {
            query.push(("brand".to_string(), brand.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if let Some(price_min) = self.price_min {
            query.push(("priceMin".to_string(), price_min.to_string()));
        }
        if let Some(price_max) = self.price_max {
            query.push(("priceMax".to_string(), price_max.to_string()));
        }
        if let Some(transmission) = self.transmission {
            query.push(("transmission".to_string(), transmission.as_str().to_string()));
        }
        if let Some(fuel_type) = self.fuel_type {
            query.push(("fuelType".to_string(), fuel_type.as_str().to_string()));
        }
        if let Some(seats) = self.seats {
            query.push(("seats".to_string(), seats.to_string()));
        }
        if let Some(available) = self.available {
            query.push(("available".to_string(), available.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

/// Request para crear un coche (solo admin/manager)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_car_pricing"))]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    pub year: i32,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    pub price_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[validate(length(min = 1, message = "at least one image is required"))]
    pub images: Vec<String>,
    pub available: bool,
}

/// Año válido y precios estrictamente positivos
fn validate_car_pricing(req: &CreateCarRequest) -> Result<(), ValidationError> {
    validate_year(req.year)?;
    validate_positive(req.price_per_day)?;
    if let Some(weekly) = req.price_per_week {
        validate_positive(weekly)?;
    }
    if let Some(monthly) = req.price_per_month {
        validate_positive(monthly)?;
    }
    Ok(())
}

/// Request para actualizar un coche; solo viajan los campos presentes
/// y cada campo presente cumple las mismas reglas que en la creación
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_car_update"))]
pub struct UpdateCarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<Transmission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

fn validate_car_update(req: &UpdateCarRequest) -> Result<(), ValidationError> {
    if let Some(year) = req.year {
        validate_year(year)?;
    }
    for price in [req.price_per_day, req.price_per_week, req.price_per_month]
        .into_iter()
        .flatten()
    {
        validate_positive(price)?;
    }
    if let Some(images) = &req.images {
        if images.is_empty() {
            let mut error = ValidationError::new("images");
            error.message = Some("at least one image is required".into());
            return Err(error);
        }
    }
    Ok(())
}

/// Respuesta del check de disponibilidad por rango de fechas
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    #[serde(default)]
    pub message: Option<String>,
}
