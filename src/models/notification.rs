use serde::{Deserialize, Serialize};

/// Notificación del backend. El snapshot completo se reemplaza en cada poll,
/// el orden y la identidad vienen del servidor tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PriceChange,
    TrackingUpdate,
    System,
    #[serde(other)]
    Other,
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::System
    }
}

impl NotificationKind {
    /// Icono FontAwesome asociado al tipo
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::PriceChange => "fa-chart-line",
            NotificationKind::TrackingUpdate => "fa-truck",
            NotificationKind::System => "fa-info-circle",
            NotificationKind::Other => "fa-bell",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_decodes_server_shape() {
        let json = r#"{"id": 3, "type": "tracking_update", "title": "Paquete en reparto",
                       "message": "DHL: en reparto", "created_at": "2024-03-01T09:30:00"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::TrackingUpdate);
        assert!(!n.read);
    }

    #[test]
    fn unknown_kind_falls_back_to_other() {
        let json = r#"{"id": 1, "type": "surprise", "title": "x"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Other);
        assert_eq!(n.kind.icon_class(), "fa-bell");
    }
}
