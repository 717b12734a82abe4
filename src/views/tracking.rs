// ============================================================================
// TRACKING VIEW - Tarjetas de envío con progreso e historial
// ============================================================================

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_click, query_selector_all, set_inner_html};
use crate::models::Order;
use crate::services::{ApiClient, OrderActions, RefreshOrchestrator, Section};
use crate::state::SessionState;
use crate::utils::format::escape_html;
use crate::utils::i18n::t;
use crate::utils::{Language, COMPACT_HISTORY_LIMIT};
use crate::viewmodels::tracking;
use crate::views::toast::{show_toast, ToastKind};

/// Tarjeta de un envío. None si el view-model viene con el sentinel de
/// error: esos pedidos se omiten del listado sin dejar hueco.
pub fn tracking_card_html(order: &Order, lang: Language) -> Option<String> {
    let vm = tracking::derive(order.tracking_details.as_deref());
    if vm.error {
        return None;
    }

    let carrier = vm.carrier.as_deref().unwrap_or("Unknown");
    let number = order.tracking_number.as_deref().unwrap_or("");

    let history_block = if vm.history.is_empty() {
        String::new()
    } else {
        let rows: String = vm
            .history
            .iter()
            .take(COMPACT_HISTORY_LIMIT)
            .enumerate()
            .map(|(index, event)| {
                let (text_class, dot_class) = if index == 0 {
                    ("text-blue-400", "bg-blue-500")
                } else {
                    ("text-gray-400", "bg-gray-600")
                };
                format!(
                    r#"<div class="flex items-start gap-3 {text_class}">
                        <div class="w-2 h-2 rounded-full {dot_class} mt-2 flex-shrink-0"></div>
                        <div class="flex-1">
                            <p class="text-xs font-medium">{time}</p>
                            <p class="text-sm">{text}</p>
                        </div>
                    </div>"#,
                    text_class = text_class,
                    dot_class = dot_class,
                    time = escape_html(&event.time),
                    text = escape_html(&event.text),
                )
            })
            .collect();
        format!(
            r#"<div class="mb-4">
                <h4 class="font-medium text-white mb-3">{}</h4>
                <div class="space-y-3 max-h-60 overflow-y-auto">{}</div>
            </div>"#,
            t(lang, "tracking.history"),
            rows
        )
    };

    let carrier_link = match &vm.url {
        Some(url) if !url.is_empty() => format!(
            r#"<a href="{}" target="_blank" class="flex-1 sm:flex-none px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700 text-sm text-center transition-colors"><i class="fas fa-external-link-alt mr-2"></i>{}</a>"#,
            escape_html(url),
            escape_html(carrier)
        ),
        _ => String::new(),
    };

    Some(format!(
        r#"<div class="bg-gray-800 rounded-xl p-6 shadow-sm border border-gray-700">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center mb-4">
                <div>
                    <h3 class="text-xl font-semibold text-white mb-1">{title}</h3>
                    <p class="text-gray-400"><i class="fas fa-truck mr-2"></i>{carrier}: {number}</p>
                </div>
                <span class="px-3 py-1 bg-blue-900/50 text-blue-300 rounded-lg text-sm font-medium mt-2 sm:mt-0">{status}</span>
            </div>
            <div class="mb-4">
                <div class="flex justify-between items-center mb-2">
                    <p class="text-sm text-gray-400">{progress_label}</p>
                    <span class="text-sm font-medium text-blue-400">{progress}%</span>
                </div>
                <div class="w-full bg-gray-700 rounded-full h-3">
                    <div class="bg-blue-500 h-3 rounded-full" style="width: {progress}%"></div>
                </div>
            </div>
            {history_block}
            <div class="flex flex-wrap gap-2">
                <button class="btn-go-order flex-1 sm:flex-none px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 text-sm transition-colors" data-id="{id}"><i class="fas fa-box mr-2"></i>{view_order}</button>
                <button class="btn-track-refresh flex-1 sm:flex-none px-4 py-2 bg-yellow-600 text-white rounded hover:bg-yellow-700 text-sm transition-colors" data-id="{id}"><i class="fas fa-sync mr-2"></i>{refresh}</button>
                {carrier_link}
            </div>
        </div>"#,
        id = order.id,
        title = escape_html(&order.title),
        carrier = escape_html(carrier),
        number = escape_html(number),
        status = escape_html(&vm.status),
        progress_label = t(lang, "tracking.progress"),
        progress = vm.progress,
        history_block = history_block,
        view_order = t(lang, "actions.viewOrder"),
        refresh = t(lang, "actions.refresh"),
        carrier_link = carrier_link,
    ))
}

/// Vista de tracking: re-render completo del listado de envíos activos
#[derive(Clone)]
pub struct TrackingView {
    api: ApiClient,
    session: SessionState,
    actions: OrderActions,
    orchestrator: RefreshOrchestrator,
}

impl TrackingView {
    pub fn new(
        api: ApiClient,
        session: SessionState,
        actions: OrderActions,
        orchestrator: RefreshOrchestrator,
    ) -> Self {
        Self {
            api,
            session,
            actions,
            orchestrator,
        }
    }

    pub async fn load(&self) {
        let orders = match self.api.get_tracking_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                log::error!("❌ Error cargando tracking: {}", e);
                show_toast("Failed to load tracking", ToastKind::Error);
                return;
            }
        };

        let lang = self.session.language();
        let container = match get_element_by_id("tracking-list") {
            Some(container) => container,
            None => return,
        };

        let cards: Vec<String> = orders
            .iter()
            .filter_map(|o| tracking_card_html(o, lang))
            .collect();

        if cards.is_empty() {
            set_inner_html(
                &container,
                &format!(
                    r#"<div class="text-center py-12">
                        <i class="fas fa-truck text-gray-600 text-4xl mb-4"></i>
                        <p class="text-gray-400">{}</p>
                    </div>"#,
                    t(lang, "tracking.empty")
                ),
            );
            return;
        }

        set_inner_html(&container, &cards.concat());
        self.wire_cards();
    }

    fn wire_cards(&self) {
        if let Ok(nodes) = query_selector_all("#tracking-list .btn-track-refresh") {
            for node in nodes.iter() {
                let element: web_sys::Element = match node.dyn_into() {
                    Ok(element) => element,
                    Err(_) => continue,
                };
                let id: i64 = match element.get_attribute("data-id").and_then(|v| v.parse().ok()) {
                    Some(id) => id,
                    None => continue,
                };
                let actions = self.actions.clone();
                let _ = on_click(&element, move |_| {
                    let actions = actions.clone();
                    spawn_local(async move { actions.refresh_tracking(id).await });
                });
            }
        }

        if let Ok(nodes) = query_selector_all("#tracking-list .btn-go-order") {
            for node in nodes.iter() {
                let element: web_sys::Element = match node.dyn_into() {
                    Ok(element) => element,
                    Err(_) => continue,
                };
                let orchestrator = self.orchestrator.clone();
                let _ = on_click(&element, move |_| {
                    crate::views::navigate_to(&orchestrator, Section::Orders);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn tracked_order(details: Option<&str>) -> Order {
        Order {
            id: 11,
            ad_id: None,
            title: "Fahrrad".to_string(),
            price: 120.0,
            description: None,
            category: None,
            location: None,
            seller_name: None,
            seller_since: None,
            seller_is_new: false,
            article_url: None,
            tracking_number: Some("JD014600003RF".to_string()),
            carrier: Some("hermes".to_string()),
            tracking_details: details.map(str::to_string),
            status: OrderStatus::Shipped,
            color: None,
            notes: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn error_payload_yields_no_card() {
        assert!(tracking_card_html(&tracked_order(None), Language::En).is_none());
        assert!(
            tracking_card_html(&tracked_order(Some(r#"{"error": "carrier down"}"#)), Language::En)
                .is_none()
        );
    }

    #[test]
    fn card_shows_progress_and_newest_event_highlighted() {
        let details = r#"{"carrier": "Hermes", "status": "Out for delivery", "progress": 90,
            "history": [{"time": "08:00", "text": "loaded"}, {"time": "07:00", "text": "sorted"}],
            "url": "https://tracker.example/JD014600003RF"}"#;
        let html = tracking_card_html(&tracked_order(Some(details)), Language::En).unwrap();
        assert!(html.contains("Hermes: JD014600003RF"));
        assert!(html.contains("90%"));
        assert!(html.contains("Out for delivery"));
        // Primer evento destacado en azul
        let first = html.find("loaded").unwrap();
        let second = html.find("sorted").unwrap();
        assert!(first < second);
        assert!(html.contains("https://tracker.example/JD014600003RF"));
    }
}
