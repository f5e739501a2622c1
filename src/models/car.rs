//! Modelo de coche del catálogo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de transmisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }
}

/// Tipo de combustible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }
}

/// Coche del catálogo de alquiler
///
/// El flag `available` es un snapshot administrativo: la disponibilidad
/// real para un rango de fechas concreto la decide el backend en
/// `/cars/{id}/availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    pub price_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
