// ============================================================================
// TOAST & LOADING - Feedback global de las operaciones
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{get_element_by_id, hide_element, set_text_by_id, show_element};

/// Variante visual del toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    fn content_class(&self) -> &'static str {
        match self {
            ToastKind::Success => {
                "px-6 py-4 rounded-lg shadow-lg flex items-center gap-3 min-w-[300px] max-w-md bg-green-500 text-white"
            }
            ToastKind::Error => {
                "px-6 py-4 rounded-lg shadow-lg flex items-center gap-3 min-w-[300px] max-w-md bg-red-500 text-white"
            }
            ToastKind::Warning => {
                "px-6 py-4 rounded-lg shadow-lg flex items-center gap-3 min-w-[300px] max-w-md bg-yellow-500 text-white"
            }
        }
    }

    fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle text-xl",
            ToastKind::Error => "fas fa-exclamation-circle text-xl",
            ToastKind::Warning => "fas fa-exclamation-triangle text-xl",
        }
    }
}

/// Mostrar un toast 5 segundos. Un toast nuevo pisa al anterior.
pub fn show_toast(message: &str, kind: ToastKind) {
    set_text_by_id("toastText", message);

    if let Some(content) = get_element_by_id("toastContent") {
        content.set_class_name(kind.content_class());
    }
    if let Some(icon) = get_element_by_id("toastIcon") {
        icon.set_class_name(kind.icon_class());
    }

    show_element("toast");
    Timeout::new(5_000, || hide_element("toast")).forget();
}

/// Overlay de carga bloqueante con texto
pub fn show_loading(text: &str) {
    set_text_by_id("loadingText", text);
    show_element("loadingOverlay");
}

pub fn hide_loading() {
    hide_element("loadingOverlay");
}
