//! Modelos del sistema
//!
//! Este módulo contiene el modelo de datos canónico que mapea exactamente
//! al formato JSON del backend REST (convención camelCase).

pub mod booking;
pub mod car;
pub mod user;

pub use booking::*;
pub use car::*;
pub use user::*;
