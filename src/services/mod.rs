//! Servicios del cliente
//!
//! Cada servicio envuelve una porción de la superficie REST (coches,
//! reservas, autenticación) más los dos componentes con secuenciación
//! propia: el flujo de disponibilidad y reserva, y el ciclo de vida de
//! estados del panel de administración.

pub mod auth_service;
pub mod booking_lifecycle;
pub mod booking_service;
pub mod booking_workflow;
pub mod car_service;

pub use auth_service::AuthService;
pub use booking_lifecycle::BookingLifecycle;
pub use booking_service::BookingService;
pub use booking_workflow::{BookingForm, BookingWorkflow, RentalQuote};
pub use car_service::CarService;
