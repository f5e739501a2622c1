//! DTOs de peticiones y respuestas del API REST

pub mod auth_dto;
pub mod booking_dto;
pub mod car_dto;

pub use auth_dto::*;
pub use booking_dto::*;
pub use car_dto::*;
