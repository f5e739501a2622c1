//! Servicio de autenticación

use reqwest::Method;
use tracing::info;

use crate::dto::{AuthResponse, LoginRequest};
use crate::gateway::{ApiBody, ApiGateway};
use crate::models::User;
use crate::session::SessionStore;
use crate::utils::errors::ApiResult;

/// Login, logout y resolución del usuario actual
#[derive(Clone)]
pub struct AuthService {
    gateway: ApiGateway,
    session: SessionStore,
}

impl AuthService {
    pub fn new(gateway: ApiGateway, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// POST `/auth/login`: establece la sesión a través del store
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;

        let response: AuthResponse = self
            .gateway
            .request("auth/login", Method::POST, Some(ApiBody::Json(body)), &[], false)
            .await?;

        self.session
            .set_session(response.token, Some(response.user.clone()));
        info!(user_id = response.user.id, "user logged in");
        Ok(response.user)
    }

    /// GET `/auth/me`: resolución real del rol del usuario actual
    pub async fn current_user(&self) -> ApiResult<User> {
        let user: User = self
            .gateway
            .request("auth/me", Method::GET, None, &[], true)
            .await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    pub fn logout(&self) {
        self.session.clear();
    }
}
