// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;
use wasm_bindgen::JsCast;

/// Idioma activo de la interfaz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
}

impl Language {
    /// Clave persistida en localStorage ("en"/"de")
    pub fn as_key(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Parsear clave persistida; valores desconocidos caen al default (En)
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("de") => Language::De,
            _ => Language::En,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::En => {
            // Navegación
            translations.insert("nav.dashboard", "Dashboard");
            translations.insert("nav.orders", "Orders");
            translations.insert("nav.tracking", "Package Tracking");
            translations.insert("nav.statistics", "Statistics");

            // Dashboard
            translations.insert("dashboard.title", "Dashboard");
            translations.insert("dashboard.statusChart", "Order Status Distribution");
            translations.insert("dashboard.recentActivity", "Recent Activity");
            translations.insert("stats.total", "Total Orders");
            translations.insert("stats.transit", "In Transit");
            translations.insert("stats.value", "Total Value");
            translations.insert("stats.newSellers", "New Sellers");

            // Orders
            translations.insert("orders.title", "Orders");
            translations.insert("orders.addNew", "Add New Order");
            translations.insert("orders.searchPlaceholder", "Search...");
            translations.insert("orders.urlPlaceholder", "Enter listing URL...");
            translations.insert("orders.allStatus", "All Status");
            translations.insert("orders.allColors", "All Colors");
            translations.insert("orders.empty", "No orders found");
            translations.insert("order.price", "Price");
            translations.insert("order.category", "Category");
            translations.insert("order.location", "Location");
            translations.insert("order.seller", "Seller");
            translations.insert("edit.title", "Edit Order");

            // Tracking
            translations.insert("tracking.title", "Package Tracking");
            translations.insert("tracking.addTitle", "Add Tracking Number");
            translations.insert("tracking.carrier", "Select Carrier");
            translations.insert("tracking.number", "Tracking Number");
            translations.insert("tracking.progress", "Progress");
            translations.insert("tracking.history", "Tracking History");
            translations.insert("tracking.empty", "No active shipments");

            // Statistics
            translations.insert("statistics.title", "Statistics");
            translations.insert("statistics.byStatus", "By Status");
            translations.insert("statistics.topCategories", "Top Categories");

            // Estados
            translations.insert("status.ordered", "Ordered");
            translations.insert("status.shipped", "Shipped");
            translations.insert("status.delivered", "Delivered");

            // Acciones
            translations.insert("actions.addOrder", "Add Order");
            translations.insert("actions.save", "Save");
            translations.insert("actions.cancel", "Cancel");
            translations.insert("actions.refresh", "Refresh");
            translations.insert("actions.updateAll", "Update All");
            translations.insert("actions.edit", "Edit");
            translations.insert("actions.delete", "Delete");
            translations.insert("actions.addTracking", "Add Tracking");
            translations.insert("actions.updateTracking", "Update");
            translations.insert("actions.viewOrder", "View Order");

            // Notificaciones
            translations.insert("notifications.title", "Notifications");
            translations.insert("notifications.empty", "No new notifications");
            translations.insert("notifications.clearAll", "Clear All");

            // Misceláneo
            translations.insert("loading.title", "Loading...");
            translations.insert("seller.new", "New Seller");
            translations.insert("seller.since", "Since");
        }
        Language::De => {
            // Navegación
            translations.insert("nav.dashboard", "Übersicht");
            translations.insert("nav.orders", "Bestellungen");
            translations.insert("nav.tracking", "Sendungsverfolgung");
            translations.insert("nav.statistics", "Statistiken");

            // Dashboard
            translations.insert("dashboard.title", "Übersicht");
            translations.insert("dashboard.statusChart", "Bestellstatus Verteilung");
            translations.insert("dashboard.recentActivity", "Letzte Aktivitäten");
            translations.insert("stats.total", "Gesamt");
            translations.insert("stats.transit", "Unterwegs");
            translations.insert("stats.value", "Gesamtwert");
            translations.insert("stats.newSellers", "Neue Verkäufer");

            // Orders
            translations.insert("orders.title", "Bestellungen");
            translations.insert("orders.addNew", "Neue Bestellung hinzufügen");
            translations.insert("orders.searchPlaceholder", "Suchen...");
            translations.insert("orders.urlPlaceholder", "Anzeigen-URL eingeben...");
            translations.insert("orders.allStatus", "Alle Status");
            translations.insert("orders.allColors", "Alle Farben");
            translations.insert("orders.empty", "Keine Bestellungen gefunden");
            translations.insert("order.price", "Preis");
            translations.insert("order.category", "Kategorie");
            translations.insert("order.location", "Ort");
            translations.insert("order.seller", "Verkäufer");
            translations.insert("edit.title", "Bestellung bearbeiten");

            // Tracking
            translations.insert("tracking.title", "Sendungsverfolgung");
            translations.insert("tracking.addTitle", "Sendungsnummer hinzufügen");
            translations.insert("tracking.carrier", "Versanddienst wählen");
            translations.insert("tracking.number", "Sendungsnummer");
            translations.insert("tracking.progress", "Fortschritt");
            translations.insert("tracking.history", "Sendungsverlauf");
            translations.insert("tracking.empty", "Keine aktiven Sendungen");

            // Statistics
            translations.insert("statistics.title", "Statistiken");
            translations.insert("statistics.byStatus", "Nach Status");
            translations.insert("statistics.topCategories", "Top Kategorien");

            // Estados
            translations.insert("status.ordered", "Bestellt");
            translations.insert("status.shipped", "Versendet");
            translations.insert("status.delivered", "Zugestellt");

            // Acciones
            translations.insert("actions.addOrder", "Bestellung hinzufügen");
            translations.insert("actions.save", "Speichern");
            translations.insert("actions.cancel", "Abbrechen");
            translations.insert("actions.refresh", "Aktualisieren");
            translations.insert("actions.updateAll", "Alle aktualisieren");
            translations.insert("actions.edit", "Bearbeiten");
            translations.insert("actions.delete", "Löschen");
            translations.insert("actions.addTracking", "Sendungsnr. hinzufügen");
            translations.insert("actions.updateTracking", "Aktualisieren");
            translations.insert("actions.viewOrder", "Bestellung anzeigen");

            // Notificaciones
            translations.insert("notifications.title", "Benachrichtigungen");
            translations.insert("notifications.empty", "Keine neuen Benachrichtigungen");
            translations.insert("notifications.clearAll", "Alle löschen");

            // Misceláneo
            translations.insert("loading.title", "Lädt...");
            translations.insert("seller.new", "Neuer Verkäufer");
            translations.insert("seller.since", "Seit");
        }
    }

    translations
}

/// Traducir una clave; si no existe, se devuelve la clave tal cual
pub fn t(lang: Language, key: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Pase de re-localización sobre el texto montado: actualiza todos los
/// elementos [data-i18n] y [data-i18n-placeholder] sin recargar secciones
pub fn update_translations(lang: Language) {
    if let Ok(elements) = crate::dom::query_selector_all("[data-i18n]") {
        for element in elements.iter() {
            if let Some(element) = element.dyn_ref::<web_sys::Element>() {
                if let Some(key) = element.get_attribute("data-i18n") {
                    element.set_text_content(Some(&t(lang, &key)));
                }
            }
        }
    }

    if let Ok(elements) = crate::dom::query_selector_all("[data-i18n-placeholder]") {
        for element in elements.iter() {
            if let Some(element) = element.dyn_ref::<web_sys::Element>() {
                if let Some(key) = element.get_attribute("data-i18n-placeholder") {
                    let _ = element.set_attribute("placeholder", &t(lang, &key));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys_per_language() {
        assert_eq!(t(Language::En, "status.shipped"), "Shipped");
        assert_eq!(t(Language::De, "status.shipped"), "Versendet");
    }

    #[test]
    fn unknown_key_falls_back_to_key_itself() {
        assert_eq!(t(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn language_key_roundtrip_and_fallback() {
        assert_eq!(Language::from_key(Some("de")), Language::De);
        assert_eq!(Language::from_key(Some("fr")), Language::En);
        assert_eq!(Language::from_key(None), Language::En);
        assert_eq!(Language::De.toggled(), Language::En);
        assert_eq!(Language::from_key(Some(Language::De.as_key())), Language::De);
    }
}
