//! Taxonomía de errores del cliente
//!
//! Tres familias: fallos de transporte/HTTP (`ApiError`), fallos de
//! formulario antes de tocar la red (`FormError`) y resultados del flujo
//! de reserva (`BookingError`), donde "no disponible" es un resultado de
//! dominio distinguible de un fallo de transporte.

use thiserror::Error;
use validator::ValidationErrors;

/// Errores de la pasarela HTTP
#[derive(Error, Debug)]
pub enum ApiError {
    /// Falta de credencial o respuesta 401: la sesión ya fue limpiada
    /// y la redirección a login emitida cuando este error llega al caller
    #[error("authentication required")]
    Unauthorized,

    /// Respuesta no-2xx distinta de 401
    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    /// Fallo de red o de transporte
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Cuerpo de petición o respuesta no serializable
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ApiError {
    /// Mensaje apto para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(e) => format!("Could not reach the server: {e}"),
            ApiError::InvalidResponse(_) => {
                "The server returned an unexpected response.".to_string()
            }
        }
    }
}

/// Resultado tipado para operaciones contra el API
pub type ApiResult<T> = Result<T, ApiError>;

/// Errores de formularios administrativos (CRUD de coches)
#[derive(Error, Debug)]
pub enum FormError {
    /// Validación local por campo; nunca llega a la red
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Resultados del flujo de disponibilidad y reserva
#[derive(Error, Debug)]
pub enum BookingError {
    /// Validación local por campo; nunca llega a la red
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// El backend respondió que el coche no está libre en esas fechas.
    /// No es un fallo: la comprobación funcionó y la respuesta fue "no".
    #[error("car unavailable for the requested dates")]
    Unavailable { message: Option<String> },

    /// Ya hay un envío en curso; el segundo se rechaza sin tocar la red
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error(transparent)]
    Api(#[from] ApiError),
}
