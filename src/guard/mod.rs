//! Guard de rutas protegidas
//!
//! Máquina de estados sobre la sesión: sin credencial se redirige a
//! login sin consultar el rol; con credencial se resuelve el rol contra
//! `/auth/me` una sola vez por montaje y se decide entre renderizar,
//! o redirigir a la pantalla principal. Un fallo en la resolución del
//! rol cierra el paso (fail closed) en lugar de conceder acceso.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::models::{User, UserRole};
use crate::services::AuthService;
use crate::session::SessionStore;
use crate::ui::Navigator;
use crate::utils::errors::ApiError;

/// Estado observable del guard
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Unauthenticated,
    ResolvingRole,
    Authorized(User),
    Forbidden,
}

/// Decisión final de navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Renderizar el subárbol protegido
    Render,
    RedirectToLogin,
    RedirectToHome,
}

enum Resolution {
    User(User),
    /// La resolución devolvió 401; la pasarela ya limpió la sesión
    /// y emitió la redirección a login
    AuthExpired,
    /// Cualquier otro fallo: se trata como prohibido
    Failed,
}

/// Guard de una ruta con un conjunto de roles permitidos
///
/// Un conjunto vacío autoriza por autenticación sola.
pub struct RouteGuard {
    auth: AuthService,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    allowed_roles: Vec<UserRole>,
    resolved: OnceCell<Resolution>,
}

impl RouteGuard {
    pub fn new(
        auth: AuthService,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        allowed_roles: Vec<UserRole>,
    ) -> Self {
        Self {
            auth,
            session,
            navigator,
            allowed_roles,
            resolved: OnceCell::new(),
        }
    }

    fn allows(&self, role: UserRole) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }

    /// Estado actual sin disparar la resolución
    pub fn state(&self) -> GuardState {
        if !self.session.is_authenticated() {
            return GuardState::Unauthenticated;
        }
        match self.resolved.get() {
            None => GuardState::ResolvingRole,
            Some(Resolution::User(user)) if self.allows(user.role) => {
                GuardState::Authorized(user.clone())
            }
            Some(_) => GuardState::Forbidden,
        }
    }

    /// Evaluar el acceso, resolviendo el rol como máximo una vez
    pub async fn evaluate(&self) -> GuardDecision {
        if self.session.token().is_none() {
            debug!("no session, redirecting to login");
            self.navigator.to_login();
            return GuardDecision::RedirectToLogin;
        }

        let resolution = self
            .resolved
            .get_or_init(|| async {
                match self.auth.current_user().await {
                    Ok(user) => Resolution::User(user),
                    Err(ApiError::Unauthorized) => Resolution::AuthExpired,
                    Err(e) => {
                        warn!("role resolution failed, denying access: {e}");
                        Resolution::Failed
                    }
                }
            })
            .await;

        match resolution {
            Resolution::User(user) if self.allows(user.role) => GuardDecision::Render,
            Resolution::User(user) => {
                debug!(role = user.role.as_str(), "role not allowed for this route");
                self.navigator.to_home();
                GuardDecision::RedirectToHome
            }
            // la pasarela ya redirigió a login al limpiar la sesión
            Resolution::AuthExpired => GuardDecision::RedirectToLogin,
            Resolution::Failed => {
                self.navigator.to_home();
                GuardDecision::RedirectToHome
            }
        }
    }
}
