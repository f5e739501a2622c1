//! Pasarela HTTP hacia el backend REST
//!
//! Toda petición al backend pasa por aquí: construcción de URL, token
//! Bearer, mapeo de respuestas no-2xx a errores tipados y parseo
//! uniforme de cuerpos JSON-o-vacíos. Cada fallo produce exactamente una
//! notificación visible y después se propaga, de modo que los callers
//! pueden ramificar sobre el error sin duplicar el aviso.

use std::sync::Arc;

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::session::SessionStore;
use crate::ui::{Navigator, Notifier, NotifyKind};
use crate::utils::errors::{ApiError, ApiResult};

/// Cuerpo de una petición saliente
pub enum ApiBody {
    /// JSON con `Content-Type: application/json`
    Json(Value),
    /// Multipart: el content-type con boundary lo pone el transporte
    Multipart(reqwest::multipart::Form),
}

/// Unir base y endpoint sin duplicar prefijos
///
/// Un endpoint ya absoluto (`http(s)://...`) pasa tal cual.
fn join_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

struct GatewayInner {
    base_url: String,
    client: Client,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

/// Pasarela autenticada hacia el backend
#[derive(Clone)]
pub struct ApiGateway {
    inner: Arc<GatewayInner>,
}

impl ApiGateway {
    pub fn new(
        config: &ClientConfig,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(GatewayInner {
                base_url: config.api_base_url.clone(),
                client,
                session,
                notifier,
                navigator,
            }),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Ejecutar una petición contra el backend
    ///
    /// Con `require_auth` y sin credencial la petición se aborta antes de
    /// tocar la red y se dispara la redirección a login. Un 401 limpia la
    /// credencial y redirige; el resto de no-2xx se devuelve como
    /// `ApiError::Http` con el mensaje extraído del cuerpo de error.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<ApiBody>,
        query: &[(String, String)],
        require_auth: bool,
    ) -> ApiResult<T> {
        let token = self.inner.session.token();
        if require_auth && token.is_none() {
            warn!(endpoint, "authenticated request attempted without a session");
            self.inner.navigator.to_login();
            return Err(self.notified(ApiError::Unauthorized));
        }

        let url = join_url(&self.inner.base_url, endpoint);
        debug!(%method, %url, "API request");

        let mut request = self.inner.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token.as_deref() {
            request = request.bearer_auth(token);
        }
        match body {
            Some(ApiBody::Json(value)) => request = request.json(&value),
            Some(ApiBody::Multipart(form)) => request = request.multipart(form),
            None => {}
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.notified(ApiError::Network(e))),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Credencial rechazada: se limpia una sola vez y se fuerza re-login
            self.inner.session.clear();
            self.inner.navigator.to_login();
            return Err(self.notified(ApiError::Unauthorized));
        }

        if !status.is_success() {
            let fallback = format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(fallback);
            return Err(self.notified(ApiError::Http {
                status: status.as_u16(),
                message,
            }));
        }

        // 2xx: cuerpo JSON, o vacío/no-JSON que se trata como resultado vacío
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let value = if is_json {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => return Err(self.notified(ApiError::Network(e))),
            };
            if text.trim().is_empty() {
                Value::Null
            } else {
                match serde_json::from_str(&text) {
                    Ok(value) => value,
                    Err(e) => return Err(self.notified(ApiError::InvalidResponse(e))),
                }
            }
        } else {
            Value::Null
        };

        serde_json::from_value(value).map_err(|e| self.notified(ApiError::InvalidResponse(e)))
    }

    /// Notificar el fallo una sola vez y devolverlo para propagación
    fn notified(&self, err: ApiError) -> ApiError {
        let title = match &err {
            ApiError::Unauthorized => "Session required",
            _ => "Request failed",
        };
        self.inner
            .notifier
            .notify(title, &err.user_message(), NotifyKind::Error);
        err
    }
}
