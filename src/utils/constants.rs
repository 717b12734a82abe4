/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL env var (.env + build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Prefijo de la API versionada
pub const API_BASE: &str = "/api/v1";

/// Intervalo entre polls de notificaciones, medido desde que termina el poll anterior
pub const NOTIFICATION_POLL_INTERVAL_MS: u32 = 30_000;

/// Máximo de eventos de historial de tracking en contextos compactos (cards)
pub const COMPACT_HISTORY_LIMIT: usize = 3;

/// Claves de localStorage para preferencias persistentes
pub const PREF_LANGUAGE: &str = "language";
pub const PREF_VIEW_MODE: &str = "viewMode";
pub const PREF_SETTINGS: &str = "settings";
