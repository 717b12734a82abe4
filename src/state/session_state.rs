// ============================================================================
// SESSION STATE - Preferencias de sesión compartidas por todas las secciones
// ============================================================================
// Se crea UNA VEZ al arranque desde localStorage y vive toda la página.
// Las mutaciones pasan por setters explícitos que persisten síncronamente
// y notifican a los render callbacks suscritos (sin copias stale).
// ============================================================================

use crate::state::ReactiveState;
use crate::utils::constants::{PREF_LANGUAGE, PREF_SETTINGS, PREF_VIEW_MODE};
use crate::utils::i18n::{update_translations, Language};
use crate::utils::storage;
use serde::Deserialize;

/// Densidad de vista de la lista de pedidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn as_key(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Valores desconocidos caen al default (Grid), nunca fallan
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Grid
    }
}

/// Opción de la paleta de colores para etiquetar pedidos
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorOption {
    pub label: String,
    pub value: String,
}

/// Preferencias de usuario persistidas bajo una sola clave JSON
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub notification_sound: Option<String>,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorOption>,
}

fn default_true() -> bool {
    true
}

fn default_colors() -> Vec<ColorOption> {
    [
        ("Rot", "#ef4444"),
        ("Blau", "#3b82f6"),
        ("Grün", "#10b981"),
        ("Gelb", "#eab308"),
        ("Lila", "#a855f7"),
    ]
    .iter()
    .map(|(label, value)| ColorOption {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notification_sound: None,
            notifications_enabled: true,
            colors: default_colors(),
        }
    }
}

/// Sesión de la aplicación (idioma, densidad de vista, preferencias)
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub language: Language,
    pub view_mode: ViewMode,
    pub preferences: Preferences,
}

impl Session {
    /// Construir desde valores persistidos; datos ausentes o corruptos
    /// caen a los defaults documentados (nunca falla)
    pub fn from_persisted(
        language: Option<String>,
        view_mode: Option<String>,
        preferences: Option<Preferences>,
    ) -> Self {
        Self {
            language: Language::from_key(language.as_deref()),
            view_mode: ViewMode::from_key(view_mode.as_deref()),
            preferences: preferences.unwrap_or_default(),
        }
    }
}

/// Handle compartido de la sesión. Los clones comparten el mismo valor:
/// cada componente recibe uno en su construcción (nada de lookups globales).
#[derive(Clone)]
pub struct SessionState {
    inner: ReactiveState<Session>,
}

impl SessionState {
    /// Cargar la sesión desde localStorage (una vez, al arranque)
    pub fn load() -> Self {
        let session = Session::from_persisted(
            storage::load_string(PREF_LANGUAGE),
            storage::load_string(PREF_VIEW_MODE),
            storage::load_from_storage::<Preferences>(PREF_SETTINGS),
        );
        log::info!(
            "⚙️ Sesión inicializada: idioma={}, vista={}",
            session.language.as_key(),
            session.view_mode.as_key()
        );
        Self {
            inner: ReactiveState::new(session),
        }
    }

    /// Sesión sobre un valor dado, sin tocar localStorage
    #[cfg(test)]
    pub(crate) fn from_session(session: Session) -> Self {
        Self {
            inner: ReactiveState::new(session),
        }
    }

    pub fn language(&self) -> Language {
        self.inner.with(|s| s.language)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.inner.with(|s| s.view_mode)
    }

    pub fn preferences(&self) -> Preferences {
        self.inner.with(|s| s.preferences.clone())
    }

    /// Cambiar idioma: persiste síncronamente y re-localiza SOLO el texto
    /// montado ([data-i18n]); no recarga ninguna sección
    pub fn set_language(&self, language: Language) {
        if let Err(e) = storage::save_string(PREF_LANGUAGE, language.as_key()) {
            log::warn!("⚠️ No se pudo persistir el idioma: {}", e);
        }
        self.inner.update(|s| s.language = language);
        update_translations(language);
    }

    pub fn toggle_language(&self) {
        self.set_language(self.language().toggled());
    }

    /// Cambiar densidad de vista: persiste síncronamente y notifica
    pub fn set_view_mode(&self, mode: ViewMode) {
        if let Err(e) = storage::save_string(PREF_VIEW_MODE, mode.as_key()) {
            log::warn!("⚠️ No se pudo persistir la vista: {}", e);
        }
        self.inner.update(|s| s.view_mode = mode);
    }

    pub fn toggle_view_mode(&self) {
        self.set_view_mode(self.view_mode().toggled());
    }

    /// Suscribir un render callback a cambios de sesión
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_values_are_honored() {
        let session = Session::from_persisted(
            Some("de".to_string()),
            Some("list".to_string()),
            Some(Preferences {
                notification_sound: Some("chime".to_string()),
                notifications_enabled: false,
                colors: vec![],
            }),
        );
        assert_eq!(session.language, Language::De);
        assert_eq!(session.view_mode, ViewMode::List);
        assert!(!session.preferences.notifications_enabled);
    }

    #[test]
    fn missing_or_garbage_values_fail_open_to_defaults() {
        let session = Session::from_persisted(Some("klingon".to_string()), None, None);
        assert_eq!(session.language, Language::En);
        assert_eq!(session.view_mode, ViewMode::Grid);
        assert!(session.preferences.notifications_enabled);
        assert!(!session.preferences.colors.is_empty());
    }

    #[test]
    fn corrupted_preferences_json_falls_back() {
        // El decode tolerante rellena campos ausentes con defaults
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.notifications_enabled);
        assert_eq!(prefs.notification_sound, None);
        assert_eq!(prefs.colors.len(), 5);
    }

    #[test]
    fn view_mode_toggle_roundtrip() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::from_key(Some("list")), ViewMode::List);
        assert_eq!(ViewMode::from_key(Some("mosaic")), ViewMode::Grid);
    }
}
