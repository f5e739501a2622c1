//! Servicio del catálogo de coches

use reqwest::Method;
use tracing::warn;
use validator::Validate;

use crate::dto::{AvailabilityResponse, CarFilters, CreateCarRequest, UpdateCarRequest};
use crate::gateway::{ApiBody, ApiGateway};
use crate::models::Car;
use crate::utils::errors::{ApiResult, FormError};

use chrono::NaiveDate;

/// Lecturas públicas del catálogo y CRUD administrativo
#[derive(Clone)]
pub struct CarService {
    gateway: ApiGateway,
}

impl CarService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// GET `/cars` con filtros opcionales
    pub async fn list(&self, filters: &CarFilters) -> ApiResult<Vec<Car>> {
        self.gateway
            .request("cars", Method::GET, None, &filters.to_query(), false)
            .await
    }

    /// GET `/cars/{id}`
    pub async fn get(&self, id: i64) -> ApiResult<Car> {
        self.gateway
            .request(&format!("cars/{id}"), Method::GET, None, &[], false)
            .await
    }

    /// GET `/cars/categories`
    ///
    /// Decoración no crítica: un fallo degrada a lista vacía en lugar
    /// de propagarse.
    pub async fn categories(&self) -> Vec<String> {
        match self
            .gateway
            .request::<Vec<String>>("cars/categories", Method::GET, None, &[], false)
            .await
        {
            Ok(categories) => categories,
            Err(e) => {
                warn!("failed to load categories, falling back to empty list: {e}");
                Vec::new()
            }
        }
    }

    /// GET `/cars/{id}/availability?startDate&endDate`
    pub async fn check_availability(
        &self,
        car_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<AvailabilityResponse> {
        let query = vec![
            ("startDate".to_string(), start.format("%Y-%m-%d").to_string()),
            ("endDate".to_string(), end.format("%Y-%m-%d").to_string()),
        ];
        self.gateway
            .request(
                &format!("cars/{car_id}/availability"),
                Method::GET,
                None,
                &query,
                false,
            )
            .await
    }

    /// POST `/cars` (solo admin/manager)
    pub async fn create(&self, request: &CreateCarRequest) -> Result<Car, FormError> {
        request.validate()?;
        let body = serde_json::to_value(request).map_err(crate::utils::errors::ApiError::from)?;
        Ok(self
            .gateway
            .request("cars", Method::POST, Some(ApiBody::Json(body)), &[], true)
            .await?)
    }

    /// PUT `/cars/{id}` (solo admin/manager)
    pub async fn update(&self, id: i64, request: &UpdateCarRequest) -> Result<Car, FormError> {
        request.validate()?;
        let body = serde_json::to_value(request).map_err(crate::utils::errors::ApiError::from)?;
        Ok(self
            .gateway
            .request(
                &format!("cars/{id}"),
                Method::PUT,
                Some(ApiBody::Json(body)),
                &[],
                true,
            )
            .await?)
    }

    /// DELETE `/cars/{id}` (solo admin/manager)
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway
            .request(&format!("cars/{id}"), Method::DELETE, None, &[], true)
            .await
    }
}
