//! DTOs del flujo de reservas

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{BookingStatus, ClientInfo, PaymentStatus};

/// Request de creación de reserva
///
/// Las fechas viajan como fechas de calendario `YYYY-MM-DD`, sin hora.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub car_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client_info: ClientInfo,
}

/// Filtros del listado administrativo de reservas
#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub car_id: Option<i64>,
}

impl BookingFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(payment_status) = self.payment_status {
            query.push(("paymentStatus".to_string(), payment_status.as_str().to_string()));
        }
        if let Some(car_id) = self.car_id {
            query.push(("carId".to_string(), car_id.to_string()));
        }
        query
    }
}

/// PATCH `/bookings/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// PATCH `/bookings/{id}/payment`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingPaymentRequest {
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_booking_wire_format() {
        let req = CreateBookingRequest {
            car_id: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            client_info: ClientInfo {
                first_name: "Anna".into(),
                last_name: "Petrova".into(),
                email: "anna@example.com".into(),
                phone: "+7 900 123 45 67".into(),
            },
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["carId"], 3);
        assert_eq!(value["startDate"], "2025-06-01");
        assert_eq!(value["endDate"], "2025-06-04");
        assert_eq!(value["clientInfo"]["firstName"], "Anna");
    }

    #[test]
    fn test_status_request_omits_empty_notes() {
        let req = UpdateBookingStatusRequest {
            status: BookingStatus::Confirmed,
            notes: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "confirmed" }));
    }

    #[test]
    fn test_booking_filters_to_query() {
        let filters = BookingFilters {
            status: Some(BookingStatus::Pending),
            payment_status: None,
            car_id: Some(12),
        };
        let query = filters.to_query();
        assert_eq!(query.len(), 2);
        assert!(query.contains(&("status".to_string(), "pending".to_string())));
        assert!(query.contains(&("carId".to_string(), "12".to_string())));
    }
}
