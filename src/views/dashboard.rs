// ============================================================================
// DASHBOARD VIEW - Tarjetas de stats, gráfico de estados y actividad reciente
// ============================================================================

use crate::dom::{get_element_by_id, set_inner_html, set_text_by_id};
use crate::models::Order;
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::utils::charts_ffi::render_status_distribution;
use crate::utils::format::{escape_html, format_date, format_price};
use crate::utils::i18n::t;
use crate::utils::Language;
use crate::views::toast::{show_toast, ToastKind};

fn activity_row_html(order: &Order, lang: Language) -> String {
    let color_dot = match &order.color {
        Some(color) if !color.is_empty() => format!(
            r#"<div class="absolute -top-1 -right-1 w-3 h-3 rounded-full border border-white" style="background-color: {}"></div>"#,
            escape_html(color)
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="flex items-center justify-between p-3 hover:bg-gray-700 rounded-lg transition-colors">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-gray-700 rounded-lg flex items-center justify-center relative">
                    <i class="fas fa-box text-gray-400"></i>
                    {color_dot}
                </div>
                <div>
                    <p class="text-white font-medium">{title}</p>
                    <p class="text-xs text-gray-400">{date}</p>
                </div>
            </div>
            <div class="text-right">
                <p class="text-white font-bold">{price}</p>
                <span class="text-xs px-2 py-1 rounded {badge}">{status}</span>
            </div>
        </div>"#,
        color_dot = color_dot,
        title = escape_html(&order.title),
        date = format_date(&order.created_at),
        price = format_price(order.price),
        badge = order.status.badge_class(),
        status = t(lang, order.status.i18n_key()),
    )
}

/// HTML de la lista de actividad reciente (o su empty state)
pub fn recent_activity_html(orders: &[Order], lang: Language) -> String {
    if orders.is_empty() {
        r#"<div class="text-center py-8">
            <i class="fas fa-history text-gray-600 text-3xl mb-3"></i>
            <p class="text-gray-400">No recent activity</p>
        </div>"#
            .to_string()
    } else {
        orders.iter().map(|o| activity_row_html(o, lang)).collect()
    }
}

/// Recarga completa del dashboard: stats, gráfico y actividad reciente.
/// Cualquier fallo deja lo ya pintado como está y avisa con un toast.
pub async fn load(api: &ApiClient, session: &SessionState) {
    let lang = session.language();

    let stats = match api.get_stats().await {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("❌ Error cargando stats: {}", e);
            show_toast("Failed to load dashboard", ToastKind::Error);
            return;
        }
    };

    set_text_by_id("stat-total", &stats.total.to_string());
    set_text_by_id("stat-transit", &stats.transit.to_string());
    set_text_by_id("stat-value", &format!("€{}", stats.value));
    set_text_by_id("stat-new-sellers", &stats.new_sellers.to_string());

    match api.get_detailed_stats().await {
        Ok(detail) => {
            // El renderer JS no tolera instancias duplicadas sobre el canvas
            crate::utils::charts_ffi::destroy_charts();
            let labels: Vec<String> = detail
                .by_status
                .keys()
                .map(|s| t(lang, &format!("status.{}", s.to_lowercase())))
                .collect();
            let values: Vec<i64> = detail.by_status.values().copied().collect();
            render_status_distribution(&labels, &values);
        }
        Err(e) => log::error!("❌ Error cargando stats detalladas: {}", e),
    }

    match api.get_orders("", "", "", Some(5)).await {
        Ok(orders) => {
            if let Some(container) = get_element_by_id("recent-activity") {
                set_inner_html(&container, &recent_activity_html(&orders, lang));
            }
        }
        Err(e) => log::error!("❌ Error cargando actividad reciente: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn order(title: &str, price: f64, color: Option<&str>) -> Order {
        Order {
            id: 1,
            ad_id: None,
            title: title.to_string(),
            price,
            description: None,
            category: None,
            location: None,
            seller_name: None,
            seller_since: None,
            seller_is_new: false,
            article_url: None,
            tracking_number: None,
            carrier: None,
            tracking_details: None,
            status: OrderStatus::Shipped,
            color: color.map(str::to_string),
            notes: None,
            created_at: "2024-03-01T09:30:00".to_string(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn empty_activity_shows_placeholder() {
        let html = recent_activity_html(&[], Language::En);
        assert!(html.contains("No recent activity"));
    }

    #[test]
    fn activity_row_carries_price_date_and_status() {
        let html = recent_activity_html(&[order("Lampe", 12.5, Some("#ef4444"))], Language::De);
        assert!(html.contains("Lampe"));
        assert!(html.contains("€12.50"));
        assert!(html.contains("01.03.2024"));
        assert!(html.contains("Versendet"));
        assert!(html.contains("background-color: #ef4444"));
    }

    #[test]
    fn colorless_order_has_no_dot() {
        let html = recent_activity_html(&[order("Stuhl", 5.0, None)], Language::En);
        assert!(!html.contains("background-color"));
    }
}
