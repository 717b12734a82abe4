// ============================================================================
// ORDERS VIEW - Listado con filtros, tarjetas y modales de edición
// ============================================================================
// La vista entera se re-renderiza en cada load (sin patching incremental);
// los listeners de las tarjetas mueren con el innerHTML anterior.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{
    self, append_child, get_element_by_id, hide_element, input_value, on_click,
    query_selector_all, select_value, set_inner_html, set_input_value, set_select_value,
    show_element, ElementBuilder,
};
use crate::models::{Order, OrderStatus, OrderUpdate};
use crate::services::{ApiClient, OrderActions};
use crate::state::{SessionState, ViewMode};
use crate::utils::format::{escape_html, format_price};
use crate::utils::i18n::t;
use crate::utils::{Language, COMPACT_HISTORY_LIMIT};
use crate::viewmodels::tracking;
use crate::views::toast::{show_toast, ToastKind};

const GRID_CLASSES: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 lg:gap-6";
const LIST_CLASSES: &str = "space-y-4";

fn color_dot_html(order: &Order) -> String {
    match &order.color {
        Some(color) if !color.is_empty() => format!(
            r#"<div class="absolute top-2 left-2 w-4 h-4 rounded-full z-10 border-2 border-white shadow-lg" style="background-color: {}"></div>"#,
            escape_html(color)
        ),
        _ => String::new(),
    }
}

/// Bloque colapsable de tracking dentro de la tarjeta. Vacío si el pedido
/// no tiene número o el view-model viene con el sentinel de error.
fn tracking_block_html(order: &Order) -> String {
    let number = match &order.tracking_number {
        Some(number) if !number.is_empty() => number,
        _ => return String::new(),
    };
    let vm = tracking::derive(order.tracking_details.as_deref());
    if vm.error {
        return String::new();
    }

    let history: String = vm
        .history
        .iter()
        .take(COMPACT_HISTORY_LIMIT)
        .map(|event| {
            format!(
                r#"<div class="flex items-start gap-2">
                    <i class="fas fa-circle text-blue-400" style="font-size: 6px; margin-top: 5px;"></i>
                    <div>
                        <span class="text-gray-500">{}</span>
                        <p class="text-gray-400">{}</p>
                    </div>
                </div>"#,
                escape_html(&event.time),
                escape_html(&event.text),
            )
        })
        .collect();
    let history_block = if history.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="space-y-1">{}</div>"#, history)
    };

    format!(
        r#"<div class="mb-3">
            <button class="btn-toggle-tracking w-full p-2 bg-blue-900/30 border border-blue-700 rounded hover:bg-blue-900/50 transition-colors" data-id="{id}">
                <div class="flex items-center justify-between text-xs">
                    <span class="text-blue-300">
                        <i class="fas fa-truck mr-1"></i>{carrier}: {number}
                    </span>
                    <div class="flex items-center gap-2">
                        <span class="text-blue-400">{progress}%</span>
                        <i id="tracking-icon-{id}" class="fas fa-chevron-down text-blue-400"></i>
                    </div>
                </div>
                <div class="w-full bg-gray-700 rounded-full h-1 mt-2">
                    <div class="bg-blue-500 h-1 rounded-full" style="width: {progress}%"></div>
                </div>
            </button>
            <div id="tracking-details-{id}" class="hidden mt-2 p-2 bg-gray-900 rounded text-xs text-gray-300">
                <p class="mb-2 font-medium">{status}</p>
                {history_block}
            </div>
        </div>"#,
        id = order.id,
        carrier = escape_html(vm.carrier.as_deref().unwrap_or("Tracking")),
        number = escape_html(number),
        progress = vm.progress,
        status = escape_html(&vm.status),
        history_block = history_block,
    )
}

fn action_buttons_html(order: &Order, lang: Language) -> String {
    let tracking_button = if order.tracking_number.as_deref().unwrap_or("").is_empty() {
        format!(
            r#"<button class="btn-tracking-add flex-1 px-3 py-2 bg-green-600 text-white rounded hover:bg-green-700 text-xs transition-colors" data-id="{}" title="{}"><i class="fas fa-plus"></i></button>"#,
            order.id,
            t(lang, "actions.addTracking")
        )
    } else {
        format!(
            r#"<button class="btn-tracking-refresh flex-1 px-3 py-2 bg-yellow-600 text-white rounded hover:bg-yellow-700 text-xs transition-colors" data-id="{}" title="{}"><i class="fas fa-sync"></i></button>"#,
            order.id,
            t(lang, "actions.updateTracking")
        )
    };

    let listing_link = match &order.article_url {
        Some(url) if !url.is_empty() => format!(
            r#"<a href="{}" target="_blank" class="flex-1 px-3 py-2 bg-gray-600 text-white rounded hover:bg-gray-700 text-xs text-center transition-colors"><i class="fas fa-external-link-alt"></i></a>"#,
            escape_html(url)
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="flex flex-wrap gap-2">
            <button class="btn-edit flex-1 px-3 py-2 bg-gray-600 text-white rounded hover:bg-gray-500 text-xs transition-colors" data-id="{id}" title="{edit}"><i class="fas fa-edit"></i></button>
            <button class="btn-color flex-1 px-3 py-2 bg-purple-600 text-white rounded hover:bg-purple-700 text-xs transition-colors" data-id="{id}" title="Set Color"><i class="fas fa-palette"></i></button>
            {tracking_button}
            {listing_link}
            <button class="btn-delete flex-1 px-3 py-2 bg-red-600 text-white rounded hover:bg-red-700 text-xs transition-colors" data-id="{id}" title="{delete}"><i class="fas fa-trash"></i></button>
        </div>"#,
        id = order.id,
        edit = t(lang, "actions.edit"),
        delete = t(lang, "actions.delete"),
        tracking_button = tracking_button,
        listing_link = listing_link,
    )
}

fn seller_warning_html(order: &Order, lang: Language) -> String {
    if order.seller_is_new {
        format!(
            r#"<div class="mb-3 px-2 py-1 bg-red-900/50 text-red-300 rounded text-xs text-center">⚠️ {}</div>"#,
            t(lang, "seller.new")
        )
    } else {
        String::new()
    }
}

/// Tarjeta de pedido para la vista grid
pub fn order_card_html(order: &Order, lang: Language) -> String {
    format!(
        r#"<div class="bg-gray-800 rounded-xl shadow-sm border border-gray-700 hover:border-gray-600 transition-all relative" data-order-id="{id}">
            {color_dot}
            <div class="relative">
                <div class="w-full h-32 bg-gray-700 rounded-t-xl flex items-center justify-center">
                    <i class="fas fa-box text-gray-500 text-3xl"></i>
                </div>
                <span class="absolute top-2 right-2 px-2 py-1 rounded-lg text-xs font-medium {badge}">{status}</span>
            </div>
            <div class="p-4">
                <h3 class="text-lg font-semibold text-white mb-2 line-clamp-2">{title}</h3>
                <p class="text-2xl font-bold text-blue-400 mb-3">{price}</p>
                <div class="space-y-1 text-sm text-gray-400 mb-3">
                    <div class="flex items-center"><i class="fas fa-tag mr-2 w-4"></i><span class="truncate">{category}</span></div>
                    <div class="flex items-center"><i class="fas fa-map-marker-alt mr-2 w-4"></i><span class="truncate">{location}</span></div>
                    <div class="flex items-center"><i class="fas fa-user mr-2 w-4"></i><span class="truncate">{seller}</span></div>
                </div>
                {seller_warning}
                {tracking_block}
                {actions}
            </div>
        </div>"#,
        id = order.id,
        color_dot = color_dot_html(order),
        badge = order.status.badge_class(),
        status = t(lang, order.status.i18n_key()),
        title = escape_html(&order.title),
        price = format_price(order.price),
        category = escape_html(order.category.as_deref().unwrap_or("N/A")),
        location = escape_html(order.location.as_deref().unwrap_or("N/A")),
        seller = escape_html(order.seller_name.as_deref().unwrap_or("N/A")),
        seller_warning = seller_warning_html(order, lang),
        tracking_block = tracking_block_html(order),
        actions = action_buttons_html(order, lang),
    )
}

/// Fila de pedido para la vista list (misma información, layout horizontal)
pub fn order_list_item_html(order: &Order, lang: Language) -> String {
    format!(
        r#"<div class="bg-gray-800 rounded-xl p-4 shadow-sm border border-gray-700 hover:border-gray-600 transition-all relative" data-order-id="{id}">
            {color_dot}
            <div class="flex gap-4">
                <div class="w-20 h-20 flex-shrink-0">
                    <div class="w-full h-full bg-gray-700 rounded-lg flex items-center justify-center">
                        <i class="fas fa-box text-gray-500"></i>
                    </div>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex justify-between items-start mb-2">
                        <h3 class="text-lg font-semibold text-white truncate">{title}</h3>
                        <span class="px-2 py-1 rounded text-xs font-medium {badge} ml-2">{status}</span>
                    </div>
                    <div class="flex items-center gap-4 text-sm text-gray-400 mb-2">
                        <span class="text-xl font-bold text-blue-400">{price}</span>
                        <span><i class="fas fa-tag mr-1"></i>{category}</span>
                        <span class="hidden sm:inline"><i class="fas fa-map-marker-alt mr-1"></i>{location}</span>
                        <span class="hidden md:inline"><i class="fas fa-user mr-1"></i>{seller}</span>
                    </div>
                    {seller_warning}
                    {tracking_block}
                    {actions}
                </div>
            </div>
        </div>"#,
        id = order.id,
        color_dot = color_dot_html(order),
        badge = order.status.badge_class(),
        status = t(lang, order.status.i18n_key()),
        title = escape_html(&order.title),
        price = format_price(order.price),
        category = escape_html(order.category.as_deref().unwrap_or("N/A")),
        location = escape_html(order.location.as_deref().unwrap_or("N/A")),
        seller = escape_html(order.seller_name.as_deref().unwrap_or("N/A")),
        seller_warning = seller_warning_html(order, lang),
        tracking_block = tracking_block_html(order),
        actions = action_buttons_html(order, lang),
    )
}

fn status_select_value(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Ordered => "Ordered",
        OrderStatus::Shipped => "Shipped",
        OrderStatus::Delivered => "Delivered",
    }
}

fn status_from_select(value: &str) -> Option<OrderStatus> {
    match value {
        "Ordered" => Some(OrderStatus::Ordered),
        "Shipped" => Some(OrderStatus::Shipped),
        "Delivered" => Some(OrderStatus::Delivered),
        _ => None,
    }
}

/// Vista de pedidos: listado, filtros y los tres modales (edición, color,
/// tracking). Los targets de modal viven aquí, no en el DOM.
#[derive(Clone)]
pub struct OrdersView {
    api: ApiClient,
    session: SessionState,
    actions: OrderActions,
    color_target: Rc<Cell<Option<i64>>>,
    color_choice: Rc<RefCell<Option<String>>>,
    tracking_target: Rc<Cell<Option<i64>>>,
}

impl OrdersView {
    pub fn new(api: ApiClient, session: SessionState, actions: OrderActions) -> Self {
        Self {
            api,
            session,
            actions,
            color_target: Rc::new(Cell::new(None)),
            color_choice: Rc::new(RefCell::new(None)),
            tracking_target: Rc::new(Cell::new(None)),
        }
    }

    /// Recarga completa: lee los filtros activos, re-fetch y re-render
    pub async fn load(&self) {
        let search = input_value("searchInput");
        let status = select_value("statusFilter");
        let color = select_value("colorFilter");

        let orders = match self.api.get_orders(&search, &status, &color, None).await {
            Ok(orders) => orders,
            Err(e) => {
                log::error!("❌ Error cargando pedidos: {}", e);
                show_toast("Failed to load orders", ToastKind::Error);
                return;
            }
        };

        let lang = self.session.language();
        let container = match get_element_by_id("orders-list") {
            Some(container) => container,
            None => return,
        };

        if orders.is_empty() {
            container.set_class_name("");
            set_inner_html(
                &container,
                &format!(
                    r#"<div class="text-center py-12">
                        <i class="fas fa-box-open text-gray-600 text-4xl mb-4"></i>
                        <p class="text-gray-400">{}</p>
                    </div>"#,
                    t(lang, "orders.empty")
                ),
            );
            return;
        }

        let html: String = match self.session.view_mode() {
            ViewMode::Grid => {
                container.set_class_name(GRID_CLASSES);
                orders.iter().map(|o| order_card_html(o, lang)).collect()
            }
            ViewMode::List => {
                container.set_class_name(LIST_CLASSES);
                orders
                    .iter()
                    .map(|o| order_list_item_html(o, lang))
                    .collect()
            }
        };
        set_inner_html(&container, &html);
        self.wire_cards();
    }

    /// Conectar los botones de todas las tarjetas recién renderizadas
    fn wire_cards(&self) {
        self.wire_buttons(".btn-edit", |view, id| view.open_edit(id));
        self.wire_buttons(".btn-color", |view, id| view.show_color_picker(id));
        self.wire_buttons(".btn-tracking-add", |view, id| view.show_tracking_modal(id));
        self.wire_buttons(".btn-tracking-refresh", |view, id| {
            let actions = view.actions.clone();
            spawn_local(async move { actions.refresh_tracking(id).await });
        });
        self.wire_buttons(".btn-delete", |view, id| {
            let confirmed = dom::confirm("Really delete this order?");
            let actions = view.actions.clone();
            spawn_local(async move { actions.delete_order(id, confirmed).await });
        });
        self.wire_buttons(".btn-toggle-tracking", |_, id| toggle_tracking_details(id));
    }

    fn wire_buttons(&self, selector: &str, handler: fn(&OrdersView, i64)) {
        let nodes = match query_selector_all(&format!("#orders-list {}", selector)) {
            Ok(nodes) => nodes,
            Err(_) => return,
        };
        for node in nodes.iter() {
            let element: web_sys::Element = match node.dyn_into() {
                Ok(element) => element,
                Err(_) => continue,
            };
            let id: i64 = match element.get_attribute("data-id").and_then(|v| v.parse().ok()) {
                Some(id) => id,
                None => continue,
            };
            let view = self.clone();
            let _ = on_click(&element, move |_| handler(&view, id));
        }
    }

    // ------------------------------------------------------------------
    // Modal de edición
    // ------------------------------------------------------------------

    fn open_edit(&self, id: i64) {
        let view = self.clone();
        spawn_local(async move {
            match view.api.get_order(id).await {
                Ok(order) => {
                    set_input_value("edit_id", &order.id.to_string());
                    set_input_value("edit_title", &order.title);
                    set_input_value("edit_price", &order.price.to_string());
                    set_select_value("edit_status", status_select_value(order.status));
                    set_input_value("edit_color", order.color.as_deref().unwrap_or(""));
                    set_input_value("edit_notes", order.notes.as_deref().unwrap_or(""));
                    show_element("editModal");
                }
                Err(e) => {
                    log::error!("❌ Error cargando pedido {}: {}", id, e);
                    show_toast("Failed to load order", ToastKind::Error);
                }
            }
        });
    }

    fn save_edit(&self) {
        let id: i64 = match input_value("edit_id").parse() {
            Ok(id) => id,
            Err(_) => return,
        };
        let update = OrderUpdate {
            title: Some(input_value("edit_title")),
            price: Some(input_value("edit_price").parse().unwrap_or(0.0)),
            status: status_from_select(&select_value("edit_status")),
            color: Some(input_value("edit_color")),
            notes: Some(input_value("edit_notes")),
            ..Default::default()
        };

        hide_element("editModal");
        let actions = self.actions.clone();
        spawn_local(async move { actions.save_edit(id, update).await });
    }

    // ------------------------------------------------------------------
    // Modal de color
    // ------------------------------------------------------------------

    fn show_color_picker(&self, order_id: i64) {
        self.color_target.set(Some(order_id));
        *self.color_choice.borrow_mut() = None;

        let picker = match get_element_by_id("color-picker") {
            Some(picker) => picker,
            None => return,
        };

        set_inner_html(&picker, "");
        let mut swatches: Vec<(String, String)> = self
            .session
            .preferences()
            .colors
            .iter()
            .map(|color| (color.value.clone(), color.label.clone()))
            .collect();
        // Swatch extra para quitar el color
        swatches.push((String::new(), String::new()));

        for (color, label) in swatches {
            let button = match build_swatch(&color, &label) {
                Ok(button) => button,
                Err(_) => continue,
            };
            let choice = self.color_choice.clone();
            let selected = button.clone();
            let _ = on_click(&button, move |_| {
                if let Ok(marked) = query_selector_all("#color-picker .ring-4") {
                    for prev in marked.iter() {
                        if let Ok(prev) = prev.dyn_into::<web_sys::Element>() {
                            let _ = prev.class_list().remove_2("ring-4", "ring-white");
                        }
                    }
                }
                let _ = selected.class_list().add_2("ring-4", "ring-white");
                *choice.borrow_mut() = Some(color.clone());
            });
            let _ = append_child(&picker, &button);
        }

        show_element("colorModal");
    }

    fn apply_color(&self) {
        let target = self.color_target.take();
        let choice = self.color_choice.borrow_mut().take();
        hide_element("colorModal");

        if let (Some(id), Some(color)) = (target, choice) {
            let actions = self.actions.clone();
            spawn_local(async move { actions.apply_color(id, &color).await });
        }
    }

    // ------------------------------------------------------------------
    // Modal de tracking
    // ------------------------------------------------------------------

    fn show_tracking_modal(&self, order_id: i64) {
        self.tracking_target.set(Some(order_id));
        set_select_value("tracking_carrier", "");
        set_input_value("tracking_number", "");
        show_element("trackingModal");
    }

    fn save_tracking(&self) {
        let id = match self.tracking_target.get() {
            Some(id) => id,
            None => return,
        };
        let carrier = select_value("tracking_carrier");
        let number = input_value("tracking_number");

        let view = self.clone();
        spawn_local(async move {
            view.actions.save_tracking(id, &carrier, &number).await;
            view.tracking_target.set(None);
            hide_element("trackingModal");
        });
    }

    // ------------------------------------------------------------------
    // Wiring estático (formulario de alta y botones de modal, una vez)
    // ------------------------------------------------------------------

    pub fn wire_static(&self) {
        dom::on_click_id("btn-show-add-order", |_| {
            show_element("addOrderForm");
        });
        dom::on_click_id("btn-cancel-add-order", |_| {
            hide_element("addOrderForm");
            set_input_value("orderUrl", "");
        });

        {
            let actions = self.actions.clone();
            dom::on_click_id("btn-submit-order", move |_| {
                let url = input_value("orderUrl");
                let actions = actions.clone();
                spawn_local(async move {
                    actions.add_order(&url).await;
                    hide_element("addOrderForm");
                    set_input_value("orderUrl", "");
                });
            });
        }

        {
            let view = self.clone();
            dom::on_click_id("btn-save-edit", move |_| view.save_edit());
        }
        dom::on_click_id("btn-cancel-edit", |_| hide_element("editModal"));

        {
            let view = self.clone();
            dom::on_click_id("btn-apply-color", move |_| view.apply_color());
        }
        dom::on_click_id("btn-cancel-color", |_| hide_element("colorModal"));

        {
            let view = self.clone();
            dom::on_click_id("btn-save-tracking", move |_| view.save_tracking());
        }
        dom::on_click_id("btn-cancel-tracking", |_| hide_element("trackingModal"));

        {
            let view = self.clone();
            dom::on_change_id("statusFilter", move |_| view.reload());
        }
        {
            let view = self.clone();
            dom::on_change_id("colorFilter", move |_| view.reload());
        }
        if let Some(search) = get_element_by_id("searchInput") {
            let view = self.clone();
            let _ = dom::on_keyup(&search, move |event| {
                if event.key() == "Enter" {
                    view.reload();
                }
            });
        }
    }

    fn reload(&self) {
        let view = self.clone();
        spawn_local(async move { view.load().await });
    }
}

/// Swatch del picker de color; value vacío es el botón de "quitar color"
fn build_swatch(value: &str, label: &str) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    let builder = ElementBuilder::new("button")?;
    if value.is_empty() {
        Ok(builder
            .class("w-10 h-10 rounded-full border-2 border-gray-600 hover:border-white transition-colors bg-gray-700 flex items-center justify-center")
            .html(r#"<i class="fas fa-times text-white text-xs"></i>"#)
            .build())
    } else {
        Ok(builder
            .class("w-10 h-10 rounded-full border-2 border-gray-600 hover:border-white transition-colors")
            .attr("style", &format!("background-color: {}", value))?
            .attr("title", label)?
            .build())
    }
}

/// Colapsar/expandir los detalles de tracking de una tarjeta
fn toggle_tracking_details(order_id: i64) {
    let details = get_element_by_id(&format!("tracking-details-{}", order_id));
    let icon = get_element_by_id(&format!("tracking-icon-{}", order_id));

    if let Some(details) = details {
        let hidden = details.class_list().contains("hidden");
        if hidden {
            let _ = details.class_list().remove_1("hidden");
        } else {
            let _ = details.class_list().add_1("hidden");
        }
        if let Some(icon) = icon {
            if hidden {
                let _ = icon.class_list().replace("fa-chevron-down", "fa-chevron-up");
            } else {
                let _ = icon.class_list().replace("fa-chevron-up", "fa-chevron-down");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_order() -> Order {
        Order {
            id: 42,
            ad_id: None,
            title: "Kommode <alt>".to_string(),
            price: 80.0,
            description: None,
            category: Some("Möbel".to_string()),
            location: Some("Berlin".to_string()),
            seller_name: Some("anna".to_string()),
            seller_since: None,
            seller_is_new: false,
            article_url: Some("https://example.org/anzeige/42".to_string()),
            tracking_number: None,
            carrier: None,
            tracking_details: None,
            status: OrderStatus::Ordered,
            color: None,
            notes: None,
            created_at: "2024-02-10T08:00:00".to_string(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn card_without_tracking_offers_add_button() {
        let html = order_card_html(&base_order(), Language::En);
        assert!(html.contains("btn-tracking-add"));
        assert!(!html.contains("btn-tracking-refresh"));
        assert!(!html.contains("btn-toggle-tracking"));
        // Título escapado
        assert!(html.contains("Kommode &lt;alt&gt;"));
    }

    #[test]
    fn card_with_tracking_renders_compact_history() {
        let mut order = base_order();
        order.tracking_number = Some("00340434161094000001".to_string());
        order.tracking_details = Some(
            r#"{"carrier": "DHL", "status": "In transit", "progress": 60,
                "history": [
                    {"time": "t1", "text": "a"},
                    {"time": "t2", "text": "b"},
                    {"time": "t3", "text": "c"},
                    {"time": "t4", "text": "d"}
                ]}"#

            .to_string(),
        );
        let html = order_card_html(&order, Language::En);
        assert!(html.contains("btn-tracking-refresh"));
        assert!(html.contains("DHL: 00340434161094000001"));
        assert!(html.contains("60%"));
        // Historial compacto: máximo 3 eventos
        assert!(html.contains("t3"));
        assert!(!html.contains("t4"));
    }

    #[test]
    fn corrupt_tracking_payload_suppresses_the_block() {
        let mut order = base_order();
        order.tracking_number = Some("X123".to_string());
        order.tracking_details = Some("{not json".to_string());
        let html = order_card_html(&order, Language::En);
        assert!(!html.contains("btn-toggle-tracking"));
        // El botón de refresh sigue disponible aunque el payload esté roto
        assert!(html.contains("btn-tracking-refresh"));
    }

    #[test]
    fn new_seller_warning_appears_in_card() {
        let mut order = base_order();
        order.seller_is_new = true;
        let html = order_card_html(&order, Language::De);
        assert!(html.contains("⚠️"));
        assert!(html.contains("Neuer Verkäufer"));
    }

    #[test]
    fn list_item_carries_same_actions_as_card() {
        let html = order_list_item_html(&base_order(), Language::En);
        for class in ["btn-edit", "btn-color", "btn-tracking-add", "btn-delete"] {
            assert!(html.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn select_values_map_to_statuses() {
        assert_eq!(status_from_select("Shipped"), Some(OrderStatus::Shipped));
        assert_eq!(status_from_select(""), None);
        assert_eq!(status_from_select("Lost"), None);
    }
}
