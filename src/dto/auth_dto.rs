//! DTOs de autenticación

use serde::{Deserialize, Serialize};

use crate::models::User;

/// POST `/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de login: credencial más el usuario autenticado
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
