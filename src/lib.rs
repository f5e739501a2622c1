//! Núcleo cliente del sistema de alquiler de coches Autoprokat
//!
//! Este crate implementa la capa de orquestación que usa la interfaz web:
//! la pasarela HTTP autenticada, el contexto de sesión, el guard de rutas,
//! el flujo de disponibilidad y reserva, y el ciclo de vida de estados de
//! las reservas del panel de administración. Toda la lógica de negocio
//! autoritativa vive en el backend REST; aquí solo hay validación de
//! formularios, orquestación de peticiones y consistencia de la vista.

pub mod cache;
pub mod config;
pub mod dto;
pub mod gateway;
pub mod guard;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

pub use cache::CollectionCache;
pub use config::ClientConfig;
pub use gateway::{ApiBody, ApiGateway};
pub use guard::{GuardDecision, GuardState, RouteGuard};
pub use session::{Session, SessionStore};
pub use utils::errors::{ApiError, ApiResult, BookingError, FormError};
