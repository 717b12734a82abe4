// ============================================================================
// APP - Composición de servicios, shell estático y wiring global
// ============================================================================
// El shell se pinta UNA vez; las secciones re-renderizan su contenedor en
// cada load. Los listeners globales (nav, toggles, modales) se registran
// una sola vez aquí.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_click_id};
use crate::services::{
    ApiClient, NotificationPoller, OrderActions, RefreshOrchestrator, Section,
};
use crate::state::SessionState;
use crate::utils::i18n::update_translations;
use crate::state::ViewMode;
use crate::views::orders::OrdersView;
use crate::views::tracking::TrackingView;
use crate::views::{self, dashboard, notifications, statistics};

/// Acciones del header y los scopes que cada una recarga. El cambio de
/// idioma no recarga ninguna sección: el pase de re-localización cubre el
/// texto montado, y las listas renderizadas se re-traducen en su próximo load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderAction {
    LanguageToggle,
    ViewToggle,
}

impl HeaderAction {
    fn reload_scopes(&self) -> &'static [Section] {
        match self {
            HeaderAction::LanguageToggle => &[],
            HeaderAction::ViewToggle => &[Section::Orders],
        }
    }
}

#[derive(Clone)]
pub struct App {
    session: SessionState,
    api: ApiClient,
    orchestrator: RefreshOrchestrator,
    actions: OrderActions,
    poller: NotificationPoller,
    orders_view: OrdersView,
    tracking_view: TrackingView,
    notifications_open: Rc<Cell<bool>>,
}

impl App {
    pub fn new() -> Self {
        let session = SessionState::load();
        let api = ApiClient::new();
        let orchestrator = RefreshOrchestrator::new();
        let actions = OrderActions::new(api.clone(), session.clone(), orchestrator.clone());
        let poller = NotificationPoller::new(api.clone(), session.clone());
        let orders_view = OrdersView::new(api.clone(), session.clone(), actions.clone());
        let tracking_view = TrackingView::new(
            api.clone(),
            session.clone(),
            actions.clone(),
            orchestrator.clone(),
        );

        Self {
            session,
            api,
            orchestrator,
            actions,
            poller,
            orders_view,
            tracking_view,
            notifications_open: Rc::new(Cell::new(false)),
        }
    }

    /// Arranque completo: shell, loaders, listeners, idioma y poller
    pub fn run(&self) {
        self.render_shell();
        self.register_loaders();
        self.wire_navigation();
        self.wire_header();
        self.wire_notifications();
        self.orders_view.wire_static();

        // Los indicadores del header siguen a la sesión vía suscripción;
        // el primer sync es manual porque subscribe no re-emite el valor actual
        {
            let app = self.clone();
            self.session.subscribe(move || app.sync_header_indicators());
        }
        update_translations(self.session.language());
        self.sync_header_indicators();

        views::navigate_to(&self.orchestrator, Section::Dashboard);
        self.poller.start();

        log::info!("✅ App inicializada");
    }

    fn render_shell(&self) {
        if let Some(root) = get_element_by_id("app") {
            crate::dom::set_inner_html(&root, SHELL_HTML);
        } else {
            log::error!("❌ Falta el contenedor #app en index.html");
        }
    }

    fn register_loaders(&self) {
        {
            let api = self.api.clone();
            let session = self.session.clone();
            self.orchestrator.register(Section::Dashboard, move || {
                let api = api.clone();
                let session = session.clone();
                spawn_local(async move { dashboard::load(&api, &session).await });
            });
        }
        {
            let view = self.orders_view.clone();
            self.orchestrator.register(Section::Orders, move || {
                let view = view.clone();
                spawn_local(async move { view.load().await });
            });
        }
        {
            let view = self.tracking_view.clone();
            self.orchestrator.register(Section::Tracking, move || {
                let view = view.clone();
                spawn_local(async move { view.load().await });
            });
        }
        {
            let api = self.api.clone();
            let session = self.session.clone();
            self.orchestrator.register(Section::Statistics, move || {
                let api = api.clone();
                let session = session.clone();
                spawn_local(async move { statistics::load(&api, &session).await });
            });
        }
    }

    fn wire_navigation(&self) {
        for section in Section::ALL {
            let orchestrator = self.orchestrator.clone();
            on_click_id(section.nav_id(), move |_| {
                views::navigate_to(&orchestrator, section);
            });
        }
    }

    fn wire_header(&self) {
        {
            let app = self.clone();
            on_click_id("langToggle", move |_| {
                app.session.toggle_language();
                app.orchestrator
                    .notify_mutated(HeaderAction::LanguageToggle.reload_scopes());
            });
        }
        {
            let app = self.clone();
            on_click_id("viewToggle", move |_| {
                app.session.toggle_view_mode();
                app.orchestrator
                    .notify_mutated(HeaderAction::ViewToggle.reload_scopes());
            });
        }
        {
            let app = self.clone();
            on_click_id("btn-update-all", move |_| {
                let actions = app.actions.clone();
                spawn_local(async move { actions.refresh_all_tracking().await });
            });
        }
    }

    fn wire_notifications(&self) {
        {
            let app = self.clone();
            on_click_id("notificationBell", move |_| {
                let open = !app.notifications_open.get();
                app.notifications_open.set(open);
                notifications::toggle_panel(open, &app.poller, &app.session);
            });
        }
        {
            let app = self.clone();
            on_click_id("btn-clear-notifications", move |_| {
                let app = app.clone();
                spawn_local(async move {
                    if let Err(e) = app.poller.clear_all().await {
                        log::error!("❌ Error vaciando notificaciones: {}", e);
                    }
                    notifications::render_list(&app.poller, &app.session);
                });
            });
        }
    }

    /// Badge de idioma e icono de densidad de vista en el header
    fn sync_header_indicators(&self) {
        crate::dom::set_text_by_id(
            "currentLang",
            &self.session.language().as_key().to_uppercase(),
        );
        if let Some(icon) = get_element_by_id("viewToggleIcon") {
            let class = match self.session.view_mode() {
                ViewMode::Grid => "fas fa-list",
                ViewMode::List => "fas fa-th",
            };
            icon.set_class_name(class);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn language_toggle_declares_no_reload_scopes() {
        assert!(HeaderAction::LanguageToggle.reload_scopes().is_empty());
        assert_eq!(
            HeaderAction::ViewToggle.reload_scopes(),
            &[Section::Orders][..]
        );
    }

    #[test]
    fn language_toggle_leaves_the_visible_section_unreloaded() {
        let orchestrator = RefreshOrchestrator::new();
        let loads = Rc::new(RefCell::new(0u32));
        for section in Section::ALL {
            let loads = loads.clone();
            orchestrator.register(section, move || *loads.borrow_mut() += 1);
        }
        orchestrator.show_section(Section::Orders);
        *loads.borrow_mut() = 0;

        // Cambiar de idioma no re-fetchea la sección visible
        orchestrator.notify_mutated(HeaderAction::LanguageToggle.reload_scopes());
        assert_eq!(*loads.borrow(), 0);

        // Cambiar la densidad de vista sí re-renderiza orders
        orchestrator.notify_mutated(HeaderAction::ViewToggle.reload_scopes());
        assert_eq!(*loads.borrow(), 1);
    }
}

// Shell estático: sidebar, secciones, panel de notificaciones, modales y
// overlays. Los contenedores de sección llevan los IDs que Section espera.
const SHELL_HTML: &str = r##"
<div class="flex min-h-screen bg-gray-900 text-gray-100">
    <aside id="sidebar" class="w-64 bg-gray-800 border-r border-gray-700 flex flex-col">
        <div class="p-4 border-b border-gray-700 flex items-center justify-between">
            <h1 class="text-xl font-bold text-white">KleinManager</h1>
            <button id="langToggle" class="px-2 py-1 bg-gray-700 rounded text-xs font-medium hover:bg-gray-600 transition-colors">
                <span id="currentLang">en</span>
            </button>
        </div>
        <nav class="flex-1 p-2 space-y-1">
            <button id="nav-dashboard" class="nav-item w-full flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-700 transition-colors text-left">
                <i class="fas fa-chart-pie w-5"></i><span data-i18n="nav.dashboard">Dashboard</span>
            </button>
            <button id="nav-orders" class="nav-item w-full flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-700 transition-colors text-left">
                <i class="fas fa-box w-5"></i><span data-i18n="nav.orders">Orders</span>
            </button>
            <button id="nav-tracking" class="nav-item w-full flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-700 transition-colors text-left">
                <i class="fas fa-truck w-5"></i><span data-i18n="nav.tracking">Package Tracking</span>
            </button>
            <button id="nav-statistics" class="nav-item w-full flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-700 transition-colors text-left">
                <i class="fas fa-chart-bar w-5"></i><span data-i18n="nav.statistics">Statistics</span>
            </button>
        </nav>
        <div class="p-4 border-t border-gray-700">
            <button id="notificationBell" class="relative w-full flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-700 transition-colors text-left">
                <i class="fas fa-bell w-5"></i><span data-i18n="notifications.title">Notifications</span>
                <span id="notificationBadge" class="hidden absolute right-4 px-2 py-0.5 bg-red-600 text-white text-xs rounded-full"></span>
            </button>
        </div>
    </aside>

    <main class="flex-1 p-6 overflow-y-auto">
        <section id="dashboard" class="section hidden">
            <h2 class="text-2xl font-bold text-white mb-6" data-i18n="dashboard.title">Dashboard</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                    <p class="text-sm text-gray-400" data-i18n="stats.total">Total Orders</p>
                    <p id="stat-total" class="text-3xl font-bold text-white mt-1">-</p>
                </div>
                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                    <p class="text-sm text-gray-400" data-i18n="stats.transit">In Transit</p>
                    <p id="stat-transit" class="text-3xl font-bold text-blue-400 mt-1">-</p>
                </div>
                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                    <p class="text-sm text-gray-400" data-i18n="stats.value">Total Value</p>
                    <p id="stat-value" class="text-3xl font-bold text-green-400 mt-1">-</p>
                </div>
                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                    <p class="text-sm text-gray-400" data-i18n="stats.newSellers">New Sellers</p>
                    <p id="stat-new-sellers" class="text-3xl font-bold text-yellow-400 mt-1">-</p>
                </div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h3 class="text-lg font-semibold text-white mb-4" data-i18n="dashboard.statusChart">Order Status Distribution</h3>
                    <div class="h-64"><canvas id="statusChart"></canvas></div>
                </div>
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h3 class="text-lg font-semibold text-white mb-4" data-i18n="dashboard.recentActivity">Recent Activity</h3>
                    <div id="recent-activity" class="space-y-1"></div>
                </div>
            </div>
        </section>

        <section id="orders" class="section hidden">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-6">
                <h2 class="text-2xl font-bold text-white" data-i18n="orders.title">Orders</h2>
                <div class="flex items-center gap-2">
                    <button id="viewToggle" class="px-3 py-2 bg-gray-700 rounded-lg hover:bg-gray-600 transition-colors">
                        <i id="viewToggleIcon" class="fas fa-list"></i>
                    </button>
                    <button id="btn-show-add-order" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors">
                        <i class="fas fa-plus mr-2"></i><span data-i18n="actions.addOrder">Add Order</span>
                    </button>
                </div>
            </div>

            <div id="addOrderForm" class="hidden bg-gray-800 rounded-xl p-4 border border-gray-700 mb-6">
                <div class="flex flex-col sm:flex-row gap-2">
                    <input id="orderUrl" type="url" class="flex-1 px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white" data-i18n-placeholder="orders.urlPlaceholder" placeholder="Enter listing URL...">
                    <button id="btn-submit-order" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors" data-i18n="actions.addOrder">Add Order</button>
                    <button id="btn-cancel-add-order" class="px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-500 transition-colors" data-i18n="actions.cancel">Cancel</button>
                </div>
            </div>

            <div class="flex flex-col sm:flex-row gap-2 mb-6">
                <input id="searchInput" type="text" class="flex-1 px-4 py-2 bg-gray-800 border border-gray-600 rounded-lg text-white" data-i18n-placeholder="orders.searchPlaceholder" placeholder="Search...">
                <select id="statusFilter" class="px-4 py-2 bg-gray-800 border border-gray-600 rounded-lg text-white">
                    <option value="" data-i18n="orders.allStatus">All Status</option>
                    <option value="Ordered" data-i18n="status.ordered">Ordered</option>
                    <option value="Shipped" data-i18n="status.shipped">Shipped</option>
                    <option value="Delivered" data-i18n="status.delivered">Delivered</option>
                </select>
                <select id="colorFilter" class="px-4 py-2 bg-gray-800 border border-gray-600 rounded-lg text-white">
                    <option value="" data-i18n="orders.allColors">All Colors</option>
                    <option value="#ef4444">Rot</option>
                    <option value="#3b82f6">Blau</option>
                    <option value="#10b981">Grün</option>
                    <option value="#eab308">Gelb</option>
                    <option value="#a855f7">Lila</option>
                </select>
            </div>

            <div id="orders-list"></div>
        </section>

        <section id="tracking" class="section hidden">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-white" data-i18n="tracking.title">Package Tracking</h2>
                <button id="btn-update-all" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors">
                    <i class="fas fa-sync mr-2"></i><span data-i18n="actions.updateAll">Update All</span>
                </button>
            </div>
            <div id="tracking-list" class="space-y-6"></div>
        </section>

        <section id="statistics" class="section hidden">
            <h2 class="text-2xl font-bold text-white mb-6" data-i18n="statistics.title">Statistics</h2>
            <div id="stats-content"></div>
        </section>
    </main>
</div>

<div id="notificationsPanel" class="hidden fixed z-40 w-80 max-h-96 bg-gray-800 border border-gray-700 rounded-xl shadow-xl overflow-hidden" style="left: 17rem; top: 50%; transform: translateY(-50%);">
    <div class="flex items-center justify-between p-3 border-b border-gray-700">
        <h3 class="font-semibold text-white" data-i18n="notifications.title">Notifications</h3>
        <button id="btn-clear-notifications" class="text-xs text-blue-400 hover:text-blue-300" data-i18n="notifications.clearAll">Clear All</button>
    </div>
    <div id="notificationsList" class="overflow-y-auto max-h-80"></div>
</div>

<div id="editModal" class="hidden fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4">
    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md border border-gray-700">
        <h3 class="text-lg font-semibold text-white mb-4" data-i18n="actions.edit">Edit</h3>
        <input id="edit_id" type="hidden">
        <div class="space-y-3">
            <input id="edit_title" type="text" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white">
            <input id="edit_price" type="number" step="0.01" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white">
            <select id="edit_status" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white">
                <option value="Ordered" data-i18n="status.ordered">Ordered</option>
                <option value="Shipped" data-i18n="status.shipped">Shipped</option>
                <option value="Delivered" data-i18n="status.delivered">Delivered</option>
            </select>
            <input id="edit_color" type="text" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white" placeholder="#rrggbb">
            <textarea id="edit_notes" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white" rows="3"></textarea>
        </div>
        <div class="flex gap-2 mt-4">
            <button id="btn-save-edit" class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors" data-i18n="actions.save">Save</button>
            <button id="btn-cancel-edit" class="flex-1 px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-500 transition-colors" data-i18n="actions.cancel">Cancel</button>
        </div>
    </div>
</div>

<div id="colorModal" class="hidden fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4">
    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm border border-gray-700">
        <h3 class="text-lg font-semibold text-white mb-4">Color</h3>
        <div id="color-picker" class="flex flex-wrap gap-3 mb-4"></div>
        <div class="flex gap-2">
            <button id="btn-apply-color" class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors" data-i18n="actions.save">Save</button>
            <button id="btn-cancel-color" class="flex-1 px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-500 transition-colors" data-i18n="actions.cancel">Cancel</button>
        </div>
    </div>
</div>

<div id="trackingModal" class="hidden fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4">
    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm border border-gray-700">
        <h3 class="text-lg font-semibold text-white mb-4" data-i18n="tracking.addTitle">Add Tracking Number</h3>
        <div class="space-y-3">
            <select id="tracking_carrier" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white">
                <option value="" data-i18n="tracking.carrier">Select Carrier</option>
                <option value="dhl">DHL</option>
                <option value="hermes">Hermes</option>
                <option value="dpd">DPD</option>
                <option value="gls">GLS</option>
                <option value="ups">UPS</option>
            </select>
            <input id="tracking_number" type="text" class="w-full px-4 py-2 bg-gray-900 border border-gray-600 rounded-lg text-white" data-i18n-placeholder="tracking.number" placeholder="Tracking Number">
        </div>
        <div class="flex gap-2 mt-4">
            <button id="btn-save-tracking" class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors" data-i18n="actions.save">Save</button>
            <button id="btn-cancel-tracking" class="flex-1 px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-500 transition-colors" data-i18n="actions.cancel">Cancel</button>
        </div>
    </div>
</div>

<div id="loadingOverlay" class="hidden fixed inset-0 z-50 bg-black/60 flex items-center justify-center">
    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 flex items-center gap-3">
        <i class="fas fa-spinner fa-spin text-blue-400 text-xl"></i>
        <span id="loadingText" class="text-white">Loading...</span>
    </div>
</div>

<div id="toast" class="hidden fixed bottom-6 right-6 z-50">
    <div id="toastContent" class="px-6 py-4 rounded-lg shadow-lg flex items-center gap-3 min-w-[300px] max-w-md bg-green-500 text-white">
        <i id="toastIcon" class="fas fa-check-circle text-xl"></i>
        <span id="toastText"></span>
    </div>
</div>
"##;
