// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Gateway hacia el backend REST (no implementado en este scope; las vistas
// demo no lo llaman). Construye la URL contra la base configurada, adjunta
// el bearer de la sesión y normaliza los fallos no-2xx en un error tipado.
// Endpoints convencionales: POST /api/auth/login, POST /api/auth/register,
// GET/POST /api/reservations, DELETE /api/reservations/{id},
// GET /api/lot/spots, GET /api/alerts, GET /api/rover/status.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder};
use thiserror::Error;

use crate::models::Session;
use crate::services::store::PersistedStore;

/// Fallo de una llamada a la API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Respuesta no-2xx, con el body decodificado best-effort
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Fallo de red, de construcción del request o de parseo del body
    #[error("Network error: {0}")]
    Network(String),
}

/// Respuesta exitosa: JSON parseado o texto crudo según content-type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(serde_json::Value),
    Text(String),
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    store: PersistedStore,
}

impl ApiClient {
    pub fn new(store: PersistedStore) -> Self {
        Self { store }
    }

    /// GET `path`
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// POST `path` con body JSON
    pub async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// DELETE `path`
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Una llamada = un await, sin retry ni timeout. Cualquier status no-2xx
    /// se convierte en ApiError::Status con el body como texto (string vacío
    /// si ni siquiera se puede leer).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = build_url(&self.store.api_base(), path);

        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");

        if let Some(auth) = auth_header(self.store.session().as_ref()) {
            builder = builder.header("Authorization", &auth);
        }

        let request = match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("⚠️ [API] {} -> HTTP {}", url, status);
            return Err(ApiError::Status { status, body });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap_or_default();

        if content_type.contains("application/json") {
            let value = response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
            Ok(ApiResponse::Json(value))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
            Ok(ApiResponse::Text(text))
        }
    }
}

/// URL completa = base (sin slash final) + path
fn build_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Header Authorization si hay sesión con token
fn auth_header(session: Option<&Session>) -> Option<String> {
    let token = &session?.token;
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        assert_eq!(
            build_url("http://127.0.0.1:8000/", "/api/alerts"),
            "http://127.0.0.1:8000/api/alerts"
        );
        assert_eq!(
            build_url("http://127.0.0.1:8000", "/api/alerts"),
            "http://127.0.0.1:8000/api/alerts"
        );
    }

    #[test]
    fn bearer_header_requires_a_session_with_token() {
        assert_eq!(auth_header(None), None);

        let session = Session::demo("a@b.c", None);
        assert_eq!(
            auth_header(Some(&session)),
            Some("Bearer demo-token".to_string())
        );

        let mut empty = session;
        empty.token.clear();
        assert_eq!(auth_header(Some(&empty)), None);
    }
}
