//! Contexto de sesión
//!
//! Este módulo sustituye la lectura dispersa del token de almacenamiento
//! local por un objeto de sesión explícito con un único punto de mutación.
//! La pasarela y el guard leen de aquí; login, logout y el manejo de 401
//! mutan a través de `set_session`/`clear`; los suscriptores observan
//! cada cambio por un canal `watch`.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::TOKEN_STORAGE_KEY;
use crate::models::User;

/// Sesión activa: credencial más el usuario, si ya se resolvió
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

/// Persistencia de la credencial bajo la clave conocida
///
/// El host (shell web, app de escritorio, tests) decide dónde viven los
/// bytes; el store solo conoce la clave `auth_token`.
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, token: &str);
    fn clear(&self, key: &str);
}

/// Almacenamiento en memoria, por defecto y para tests
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<String>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, _key: &str) -> Option<String> {
        self.slot.lock().ok().and_then(|s| s.clone())
    }

    fn save(&self, _key: &str, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self, _key: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

struct SessionInner {
    tx: watch::Sender<Option<Session>>,
    storage: Box<dyn TokenStorage>,
}

/// Store de sesión compartido por todo el cliente
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl SessionStore {
    /// Crear el store rehidratando la credencial persistida, si existe
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        let initial = storage
            .load(TOKEN_STORAGE_KEY)
            .map(|token| Session { token, user: None });
        if initial.is_some() {
            debug!("session rehydrated from storage");
        }
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(SessionInner { tx, storage }),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::<MemoryTokenStorage>::default())
    }

    /// Único punto de entrada para establecer la sesión (login)
    pub fn set_session(&self, token: String, user: Option<User>) {
        self.inner.storage.save(TOKEN_STORAGE_KEY, &token);
        self.inner.tx.send_replace(Some(Session { token, user }));
        info!("session established");
    }

    /// Actualizar el usuario de la sesión vigente sin tocar la credencial
    pub fn set_user(&self, user: User) {
        self.inner.tx.send_modify(|session| {
            if let Some(session) = session {
                session.user = Some(user);
            }
        });
    }

    /// Único punto de entrada para invalidar la sesión (logout o 401)
    pub fn clear(&self) {
        self.inner.storage.clear(TOKEN_STORAGE_KEY);
        self.inner.tx.send_replace(None);
        info!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.inner.tx.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.tx.borrow().as_ref().and_then(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.tx.borrow().is_some()
    }

    /// Suscribirse a los cambios de sesión
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.tx.subscribe()
    }
}
