// ============================================================================
// ORDER ACTIONS - Operaciones mutadoras (servicio único ligado a la sesión)
// ============================================================================
// Cada operación: validación local mínima → UN solo remote call → en éxito,
// feedback + notify_mutated con sus scopes declarados → en fallo, toast de
// error y el estado cacheado queda intacto (el orquestador NUNCA se entera).
// Reemplaza la jerarquía "un controller base por pantalla" por composición.
// ============================================================================

use crate::models::{Order, OrderUpdate};
use crate::services::{ApiClient, ApiError, RefreshOrchestrator, Section};
use crate::state::SessionState;
use crate::utils::i18n::t;
use crate::views::toast::{hide_loading, show_loading, show_toast, ToastKind};

/// Scopes que puede ensuciar una mutación de pedido (alta/edición/borrado/color)
pub const ORDER_SCOPES: [Section; 2] = [Section::Dashboard, Section::Orders];

/// Scopes que puede ensuciar una mutación de tracking
pub const TRACKING_SCOPES: [Section; 3] =
    [Section::Dashboard, Section::Orders, Section::Tracking];

/// Validación local de "agregar tracking": ambos campos obligatorios.
/// Devuelve el mensaje de rechazo sin tocar la red.
pub fn tracking_input_error(carrier: &str, number: &str) -> Option<&'static str> {
    if carrier.trim().is_empty() || number.trim().is_empty() {
        Some("Please select carrier and enter tracking number")
    } else {
        None
    }
}

/// Scopes que llegan al orquestador según el resultado del remote call:
/// un fallo nunca notifica, el estado visible queda como estaba
fn notified_scopes<'a, T>(result: &Result<T, ApiError>, scopes: &'a [Section]) -> &'a [Section] {
    match result {
        Ok(_) => scopes,
        Err(_) => &[],
    }
}

#[derive(Clone)]
pub struct OrderActions {
    api: ApiClient,
    session: SessionState,
    orchestrator: RefreshOrchestrator,
}

impl OrderActions {
    pub fn new(api: ApiClient, session: SessionState, orchestrator: RefreshOrchestrator) -> Self {
        Self {
            api,
            session,
            orchestrator,
        }
    }

    /// Crear pedido desde la URL del anuncio. Si el backend marca al
    /// vendedor como nuevo, el feedback es la variante warning con
    /// nombre y antigüedad.
    pub async fn add_order(&self, url: &str) {
        if url.trim().is_empty() {
            show_toast("Please enter a listing URL", ToastKind::Error);
            return;
        }

        let lang = self.session.language();
        show_loading(&t(lang, "loading.title"));

        let result = self.api.create_order(url).await;
        hide_loading();
        match &result {
            Ok(order) => self.surface_created(order),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &ORDER_SCOPES));
    }

    fn surface_created(&self, order: &Order) {
        let lang = self.session.language();
        if order.seller_is_new {
            let seller = order.seller_name.as_deref().unwrap_or("?");
            let since = order.seller_since.as_deref().unwrap_or("?");
            show_toast(
                &format!(
                    "⚠️ {}: {} ({} {})",
                    t(lang, "seller.new"),
                    seller,
                    t(lang, "seller.since"),
                    since
                ),
                ToastKind::Warning,
            );
        } else {
            show_toast("Order added successfully", ToastKind::Success);
        }
    }

    /// Guardar la edición de un pedido (campos parciales)
    pub async fn save_edit(&self, id: i64, update: OrderUpdate) {
        show_loading("Saving changes...");

        let result = self.api.update_order(id, &update).await;
        hide_loading();
        match &result {
            Ok(_) => show_toast("Order updated successfully", ToastKind::Success),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &ORDER_SCOPES));
    }

    /// Etiquetar un pedido con un color de la paleta ("" lo des-etiqueta)
    pub async fn apply_color(&self, id: i64, color: &str) {
        let update = OrderUpdate {
            color: Some(color.to_string()),
            ..Default::default()
        };

        let result = self.api.update_order(id, &update).await;
        match &result {
            Ok(_) => show_toast("Color applied successfully", ToastKind::Success),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &ORDER_SCOPES));
    }

    /// Adjuntar número de tracking: rechazo local inmediato si falta
    /// carrier o número (cero llamadas de red en ese caso)
    pub async fn save_tracking(&self, order_id: i64, carrier: &str, number: &str) {
        if let Some(message) = tracking_input_error(carrier, number) {
            show_toast(message, ToastKind::Error);
            return;
        }

        show_loading("Adding tracking information...");

        let update = OrderUpdate {
            tracking_number: Some(number.trim().to_string()),
            carrier: Some(carrier.to_string()),
            ..Default::default()
        };

        let result = self.api.update_order(order_id, &update).await;
        hide_loading();
        match &result {
            Ok(_) => show_toast("Tracking added successfully", ToastKind::Success),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &TRACKING_SCOPES));
    }

    /// Refrescar el tracking de un pedido contra el carrier
    pub async fn refresh_tracking(&self, id: i64) {
        show_loading("Updating tracking information...");

        let result = self.api.refresh_tracking(id).await;
        hide_loading();
        match &result {
            Ok(()) => show_toast("Tracking updated", ToastKind::Success),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &TRACKING_SCOPES));
    }

    /// Refresh masivo de todos los envíos activos
    pub async fn refresh_all_tracking(&self) {
        show_loading("Updating all tracking information...");

        let result = self.api.refresh_all_tracking().await;
        hide_loading();
        match &result {
            Ok(outcome) => show_toast(
                &format!("Updated {} shipments", outcome.updated),
                ToastKind::Success,
            ),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &TRACKING_SCOPES));
    }

    /// Borrar un pedido. `confirmed` es la respuesta del diálogo de
    /// confirmación explícito: sin confirmación, cero llamadas de red.
    pub async fn delete_order(&self, id: i64, confirmed: bool) {
        if !confirmed {
            return;
        }

        let result = self.api.delete_order(id).await;
        match &result {
            Ok(()) => show_toast("Order deleted successfully", ToastKind::Success),
            Err(e) => show_toast(&e.message, ToastKind::Error),
        }
        self.orchestrator
            .notify_mutated(notified_scopes(&result, &ORDER_SCOPES));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn failed_mutation_never_reaches_the_orchestrator() {
        let orchestrator = RefreshOrchestrator::new();
        let reloads = Rc::new(RefCell::new(0u32));
        for section in Section::ALL {
            let reloads = reloads.clone();
            orchestrator.register(section, move || *reloads.borrow_mut() += 1);
        }
        orchestrator.show_section(Section::Orders);
        *reloads.borrow_mut() = 0;

        // Remote call fallido: cero recargas, la vista queda como estaba
        let failed: Result<(), ApiError> = Err(ApiError {
            message: "HTTP 500: Request failed".to_string(),
        });
        assert!(notified_scopes(&failed, &ORDER_SCOPES).is_empty());
        orchestrator.notify_mutated(notified_scopes(&failed, &ORDER_SCOPES));
        assert_eq!(*reloads.borrow(), 0);

        // El mismo cierre con éxito recarga exactamente la sección activa
        let succeeded: Result<(), ApiError> = Ok(());
        orchestrator.notify_mutated(notified_scopes(&succeeded, &ORDER_SCOPES));
        assert_eq!(*reloads.borrow(), 1);
    }

    #[test]
    fn tracking_requires_both_carrier_and_number() {
        assert!(tracking_input_error("", "123").is_some());
        assert!(tracking_input_error("dhl", "").is_some());
        assert!(tracking_input_error("  ", "  ").is_some());
        assert!(tracking_input_error("dhl", "00340434161094000001").is_none());
    }

    #[test]
    fn declared_scopes_match_what_each_mutation_can_stale() {
        // Editar precio/estado afecta dashboard y orders, nunca tracking
        assert!(!ORDER_SCOPES.contains(&Section::Tracking));
        assert!(ORDER_SCOPES.contains(&Section::Dashboard));
        // Adjuntar tracking también ensucia la sección de tracking
        assert!(TRACKING_SCOPES.contains(&Section::Tracking));
        assert!(TRACKING_SCOPES.contains(&Section::Orders));
        // Statistics solo se refresca al navegar (siempre lazy)
        assert!(!ORDER_SCOPES.contains(&Section::Statistics));
        assert!(!TRACKING_SCOPES.contains(&Section::Statistics));
    }
}
