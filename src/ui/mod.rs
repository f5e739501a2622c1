//! Costuras hacia la interfaz
//!
//! Notificaciones y navegación son capacidades del shell que hospeda al
//! cliente (toasts, router). El núcleo las consume por traits para poder
//! probarse sin interfaz.

use tracing::{error, info};

/// Tipo de notificación mostrada al usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Success,
    Error,
}

/// Emisión de notificaciones visibles (toasts)
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, kind: NotifyKind);
}

/// Navegación del shell
pub trait Navigator: Send + Sync {
    /// Redirigir a la pantalla de login
    fn to_login(&self);
    /// Redirigir a la pantalla principal
    fn to_home(&self);
    /// Navegar a una ruta arbitraria
    fn to(&self, path: &str);
}

/// Notificador por defecto: vuelca al log estructurado
#[derive(Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, message: &str, kind: NotifyKind) {
        match kind {
            NotifyKind::Error => error!(title, message, "notification"),
            _ => info!(title, message, "notification"),
        }
    }
}

/// Navegador nulo para hosts sin router (tests, demos)
#[derive(Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn to_login(&self) {}
    fn to_home(&self) {}
    fn to(&self, _path: &str) {}
}
