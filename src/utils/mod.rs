//! Utilidades del sistema
//!
//! Este módulo contiene la taxonomía de errores y los helpers
//! de validación de formularios.

pub mod errors;
pub mod validation;
