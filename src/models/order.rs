use serde::{Deserialize, Serialize};

/// Pedido tal como lo devuelve el backend.
/// El payload de tracking (`tracking_details`) llega como string JSON opaco;
/// se normaliza en `viewmodels::tracking::derive`, nunca aquí.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub ad_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_since: Option<String>,
    #[serde(default)]
    pub seller_is_new: bool,
    #[serde(default)]
    pub article_url: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub tracking_details: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Estado del pedido (enum cerrado del backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Ordered,
    Shipped,
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Ordered
    }
}

impl OrderStatus {
    /// Clave i18n del estado (`status.ordered`, etc.)
    pub fn i18n_key(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "status.ordered",
            OrderStatus::Shipped => "status.shipped",
            OrderStatus::Delivered => "status.delivered",
        }
    }

    /// Clases CSS del badge de estado
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "bg-gray-700 text-gray-300",
            OrderStatus::Shipped => "bg-blue-700 text-blue-200",
            OrderStatus::Delivered => "bg-green-700 text-green-200",
        }
    }
}

/// Body para crear un pedido desde una URL de anuncio
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreate {
    pub url: String,
}

/// Actualización parcial de un pedido (solo se serializan los campos presentes)
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_decodes_with_missing_optionals() {
        let json = r#"{"id": 7, "title": "Lámpara vintage", "status": "Shipped"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.price, 0.0);
        assert!(order.tracking_number.is_none());
        assert!(!order.seller_is_new);
    }

    #[test]
    fn order_update_serializes_only_set_fields() {
        let update = OrderUpdate {
            color: Some("#ef4444".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r##"{"color":"#ef4444"}"##);
    }

    #[test]
    fn unknown_status_is_rejected_not_defaulted() {
        let json = r#"{"id": 1, "title": "x", "status": "Lost"}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }
}
