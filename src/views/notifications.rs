// ============================================================================
// NOTIFICATIONS VIEW - Badge y panel lateral
// ============================================================================

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, hide_element, on_click, query_selector_all, set_inner_html, show_element};
use crate::models::Notification;
use crate::services::NotificationPoller;
use crate::state::SessionState;
use crate::utils::format::{escape_html, format_datetime};
use crate::utils::i18n::t;
use crate::utils::Language;

/// Actualizar el badge del bell: oculto con cero, contador con más
pub fn update_badge(count: usize) {
    if let Some(badge) = get_element_by_id("notificationBadge") {
        if count > 0 {
            badge.set_text_content(Some(&count.to_string()));
            let _ = badge.class_list().remove_1("hidden");
        } else {
            let _ = badge.class_list().add_1("hidden");
        }
    }
}

fn item_html(notification: &Notification) -> String {
    format!(
        r#"<div class="notification-item p-3 border-b border-gray-700 hover:bg-gray-700 cursor-pointer" data-id="{id}">
            <div class="flex items-start gap-3">
                <i class="fas {icon} text-blue-400 mt-1"></i>
                <div class="flex-1">
                    <p class="text-white font-medium text-sm">{title}</p>
                    <p class="text-gray-400 text-xs">{message}</p>
                    <p class="text-gray-500 text-xs mt-1">{when}</p>
                </div>
            </div>
        </div>"#,
        id = notification.id,
        icon = notification.kind.icon_class(),
        title = escape_html(&notification.title),
        message = escape_html(&notification.message),
        when = format_datetime(&notification.created_at),
    )
}

/// HTML del listado completo (o el empty state)
pub fn list_html(items: &[Notification], lang: Language) -> String {
    if items.is_empty() {
        format!(
            r#"<div class="p-4 text-center text-gray-400">
                <i class="fas fa-bell-slash text-2xl mb-2"></i>
                <p>{}</p>
            </div>"#,
            t(lang, "notifications.empty")
        )
    } else {
        items.iter().map(item_html).collect()
    }
}

/// Re-render del listado del panel + wiring de los clicks por item.
/// Un click marca leída en remoto y re-sincroniza con un poll inmediato.
pub fn render_list(poller: &NotificationPoller, session: &SessionState) {
    let items = poller.snapshot();
    if let Some(container) = get_element_by_id("notificationsList") {
        set_inner_html(&container, &list_html(&items, session.language()));
    }

    if let Ok(nodes) = query_selector_all("#notificationsList .notification-item") {
        for node in nodes.iter() {
            let element: web_sys::Element = match node.dyn_into() {
                Ok(element) => element,
                Err(_) => continue,
            };
            let id: i64 = match element.get_attribute("data-id").and_then(|v| v.parse().ok()) {
                Some(id) => id,
                None => continue,
            };

            let poller = poller.clone();
            let session = session.clone();
            let _ = on_click(&element, move |_| {
                let poller = poller.clone();
                let session = session.clone();
                spawn_local(async move {
                    if let Err(e) = poller.acknowledge(id).await {
                        log::error!("❌ Error marcando notificación {}: {}", id, e);
                    }
                    render_list(&poller, &session);
                });
            });
        }
    }
}

/// Abrir/cerrar el panel; al abrir se re-renderiza con el snapshot actual
pub fn toggle_panel(open: bool, poller: &NotificationPoller, session: &SessionState) {
    if open {
        show_element("notificationsPanel");
        render_list(poller, session);
    } else {
        hide_element("notificationsPanel");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    #[test]
    fn empty_list_renders_placeholder() {
        let html = list_html(&[], Language::En);
        assert!(html.contains("No new notifications"));
        assert!(html.contains("fa-bell-slash"));
    }

    #[test]
    fn item_escapes_server_text() {
        let n = Notification {
            id: 9,
            kind: NotificationKind::PriceChange,
            title: "<script>alert(1)</script>".to_string(),
            message: "Preis & Co".to_string(),
            created_at: "2024-03-01T09:30:00".to_string(),
            read: false,
        };
        let html = item_html(&n);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Preis &amp; Co"));
        assert!(html.contains("fa-chart-line"));
        assert!(html.contains(r#"data-id="9""#));
    }
}
