// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todos los fallos se normalizan a un único ApiError: detail del backend
// textual cuando existe, mensaje genérico en caso contrario.
// ============================================================================

use crate::models::{
    Notification, Order, OrderCreate, OrderUpdate, StatsDetail, StatsSummary,
    TrackingUpdateResult,
};
use crate::utils::constants::{API_BASE, BACKEND_URL};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use std::fmt;

/// Error normalizado de la API, apto para mostrarse tal cual en un toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Envelope de error del backend: { "detail": "..." }
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Normalizar el cuerpo de un error HTTP: el detail se muestra textual,
/// cuerpos no parseables caen a un mensaje genérico con el status
pub fn normalize_error_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("HTTP {}: Request failed", status))
}

/// Construir el query string de listado de pedidos (filtros AND, todos opcionales)
pub fn orders_query(search: &str, status: &str, color: &str, limit: Option<u32>) -> String {
    let mut query = String::from("?");
    if !search.is_empty() {
        query.push_str(&format!("search={}&", urlencode(search)));
    }
    if !status.is_empty() {
        query.push_str(&format!("status={}&", urlencode(status)));
    }
    if !color.is_empty() {
        query.push_str(&format!("color={}&", urlencode(color)));
    }
    if let Some(limit) = limit {
        query.push_str(&format!("limit={}&", limit));
    }
    query.trim_end_matches(['&', '?']).to_string()
}

/// Percent-encoding al estilo encodeURIComponent (solo caracteres no reservados)
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: format!("{}{}", BACKEND_URL, API_BASE),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Decodificar la respuesta con el envelope uniforme
    async fn handle<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::new(format!("Parse error: {}", e)))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Variante para endpoints cuyo cuerpo de éxito no interesa
    async fn handle_empty(response: Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::new(normalize_error_body(status, &body))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle(response).await
    }

    // ------------------------------------------------------------------
    // Notificaciones
    // ------------------------------------------------------------------

    /// Snapshot completo de notificaciones (se reemplaza, no se mergea)
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }

    /// Marcar una notificación como leída (idempotente)
    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!("/notifications/{}/read", id)))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle_empty(response).await
    }

    /// Borrar todas las notificaciones (idempotente)
    pub async fn clear_notifications(&self) -> Result<(), ApiError> {
        let response = Request::delete(&self.url("/notifications"))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle_empty(response).await
    }

    // ------------------------------------------------------------------
    // Pedidos
    // ------------------------------------------------------------------

    /// Listar pedidos con filtros opcionales (semántica AND)
    pub async fn get_orders(
        &self,
        search: &str,
        status: &str,
        color: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Order>, ApiError> {
        let endpoint = format!("/orders{}", orders_query(search, status, color, limit));
        self.get(&endpoint).await
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{}", id)).await
    }

    /// Crear pedido desde la URL del anuncio
    pub async fn create_order(&self, url: &str) -> Result<Order, ApiError> {
        let body = OrderCreate {
            url: url.to_string(),
        };
        let response = Request::post(&self.url("/orders"))
            .json(&body)
            .map_err(|e| ApiError::new(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle(response).await
    }

    /// Actualización parcial de un pedido
    pub async fn update_order(&self, id: i64, update: &OrderUpdate) -> Result<Order, ApiError> {
        let response = Request::put(&self.url(&format!("/orders/{}", id)))
            .json(update)
            .map_err(|e| ApiError::new(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle(response).await
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/orders/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle_empty(response).await
    }

    // ------------------------------------------------------------------
    // Tracking
    // ------------------------------------------------------------------

    /// Pedidos actualmente bajo seguimiento
    pub async fn get_tracking_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders/tracking").await
    }

    /// Refrescar el tracking de un pedido
    pub async fn refresh_tracking(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!("/orders/{}/tracking", id)))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle_empty(response).await
    }

    /// Refrescar el tracking de todos los envíos activos
    pub async fn refresh_all_tracking(&self) -> Result<TrackingUpdateResult, ApiError> {
        let response = Request::post(&self.url("/tracking/update-all"))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;
        Self::handle(response).await
    }

    // ------------------------------------------------------------------
    // Estadísticas
    // ------------------------------------------------------------------

    pub async fn get_stats(&self) -> Result<StatsSummary, ApiError> {
        self.get("/stats").await
    }

    pub async fn get_detailed_stats(&self) -> Result<StatsDetail, ApiError> {
        self.get("/stats/detail").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_message_is_surfaced_verbatim() {
        let body = r#"{"detail": "Order already exists"}"#;
        assert_eq!(normalize_error_body(400, body), "Order already exists");
    }

    #[test]
    fn orders_query_combines_optional_filters_with_and() {
        assert_eq!(orders_query("", "", "", None), "");
        assert_eq!(orders_query("lampe", "", "", None), "?search=lampe");
        assert_eq!(
            orders_query("alte lampe", "Shipped", "#ef4444", None),
            "?search=alte%20lampe&status=Shipped&color=%23ef4444"
        );
        assert_eq!(orders_query("", "", "", Some(5)), "?limit=5");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic() {
        assert_eq!(
            normalize_error_body(502, "<html>Bad Gateway</html>"),
            "HTTP 502: Request failed"
        );
        assert_eq!(normalize_error_body(500, ""), "HTTP 500: Request failed");
        assert_eq!(
            normalize_error_body(422, r#"{"detail": ""}"#),
            "HTTP 422: Request failed"
        );
    }
}
