//! Servicio de reservas

use reqwest::Method;

use crate::dto::{
    BookingFilters, CreateBookingRequest, UpdateBookingPaymentRequest, UpdateBookingStatusRequest,
};
use crate::gateway::{ApiBody, ApiGateway};
use crate::models::{Booking, BookingStatus, PaymentStatus};
use crate::utils::errors::{ApiError, ApiResult};

/// Acceso a la superficie REST de reservas
#[derive(Clone)]
pub struct BookingService {
    gateway: ApiGateway,
}

impl BookingService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// GET `/bookings` con filtros opcionales (panel de administración)
    pub async fn list(&self, filters: &BookingFilters) -> ApiResult<Vec<Booking>> {
        self.gateway
            .request("bookings", Method::GET, None, &filters.to_query(), true)
            .await
    }

    /// GET `/bookings/{id}`
    pub async fn get(&self, id: i64) -> ApiResult<Booking> {
        self.gateway
            .request(&format!("bookings/{id}"), Method::GET, None, &[], true)
            .await
    }

    /// POST `/bookings`
    ///
    /// Cualquier visitante puede crear una reserva; si hay sesión, la
    /// pasarela adjunta el token igualmente.
    pub async fn create(&self, request: &CreateBookingRequest) -> ApiResult<Booking> {
        let body = serde_json::to_value(request).map_err(ApiError::from)?;
        self.gateway
            .request("bookings", Method::POST, Some(ApiBody::Json(body)), &[], false)
            .await
    }

    /// PATCH `/bookings/{id}/status`
    pub async fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> ApiResult<Booking> {
        let body = serde_json::to_value(UpdateBookingStatusRequest { status, notes })
            .map_err(ApiError::from)?;
        self.gateway
            .request(
                &format!("bookings/{id}/status"),
                Method::PATCH,
                Some(ApiBody::Json(body)),
                &[],
                true,
            )
            .await
    }

    /// PATCH `/bookings/{id}/payment`
    pub async fn update_payment(
        &self,
        id: i64,
        payment_status: PaymentStatus,
    ) -> ApiResult<Booking> {
        let body = serde_json::to_value(UpdateBookingPaymentRequest { payment_status })
            .map_err(ApiError::from)?;
        self.gateway
            .request(
                &format!("bookings/{id}/payment"),
                Method::PATCH,
                Some(ApiBody::Json(body)),
                &[],
                true,
            )
            .await
    }

    /// POST `/bookings/{id}/cancel`
    pub async fn cancel(&self, id: i64) -> ApiResult<Booking> {
        self.gateway
            .request(&format!("bookings/{id}/cancel"), Method::POST, None, &[], true)
            .await
    }

    /// GET `/user/bookings`: reservas del usuario autenticado
    pub async fn user_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.gateway
            .request("user/bookings", Method::GET, None, &[], true)
            .await
    }
}
