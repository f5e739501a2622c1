//! Modelo de reserva y cálculo del coste de alquiler

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::car::Car;

/// Estado del ciclo de vida de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "active" => Some(BookingStatus::Active),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }
}

/// Estado de pago, independiente del estado de la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

/// Datos de contacto del cliente, obligatorios en toda reserva
/// aunque el que la envía no esté registrado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Reserva de un coche para un rango de fechas
///
/// Invariante del backend: `end_date > start_date` y
/// `total_price = price_per_day × rental_days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub car_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub client_info: ClientInfo,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<Car>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Días de alquiler entre dos fechas de calendario, mínimo 1
///
/// La validación del formulario rechaza `end <= start` antes de llegar
/// aquí; el mínimo cubre el caso degenerado sin cobrar cero días.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(1)
}

/// Coste del alquiler: precio por día × días
pub fn rental_cost(price_per_day: f64, start: NaiveDate, end: NaiveDate) -> f64 {
    price_per_day * rental_days(start, end) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_rental_days_three_days() {
        assert_eq!(rental_days(date("2025-06-01"), date("2025-06-04")), 3);
    }

    #[test]
    fn test_rental_days_minimum_one() {
        assert_eq!(rental_days(date("2025-06-01"), date("2025-06-01")), 1);
    }

    #[test]
    fn test_rental_cost_three_days() {
        // 5000/día, 2025-06-01 → 2025-06-04: 3 días, 15000
        let cost = rental_cost(5000.0, date("2025-06-01"), date("2025-06-04"));
        assert_eq!(cost, 15000.0);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Active,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Rejected,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::from_str("unknown"), None);
    }

    #[test]
    fn test_booking_dates_serialize_as_calendar_dates() {
        let info = ClientInfo {
            first_name: "Anna".into(),
            last_name: "Petrova".into(),
            email: "anna@example.com".into(),
            phone: "+7 900 123 45 67".into(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["firstName"], "Anna");

        let status = serde_json::to_value(BookingStatus::Confirmed).unwrap();
        assert_eq!(status, "confirmed");

        let payment = serde_json::to_value(PaymentStatus::Paid).unwrap();
        assert_eq!(payment, "paid");
    }
}
