//! Configuración del cliente
//!
//! Este módulo contiene la configuración del API remoto y las
//! constantes de almacenamiento local.

pub mod environment;

pub use environment::*;
