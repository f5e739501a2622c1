//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del cliente: URL base del API
//! y timeout de las peticiones HTTP.

use std::env;

/// URL base del API por defecto
const DEFAULT_API_BASE_URL: &str = "https://api.autoprokrat.ru/api";

/// Timeout por defecto de las peticiones, en segundos
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Clave bajo la que se persiste el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Configuración del cliente
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Crear configuración explícita apuntando a una URL base
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Cargar la configuración desde variables de entorno
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
