// ============================================================================
// STATISTICS VIEW - Desglose por estado y top de categorías
// ============================================================================

use crate::dom::{get_element_by_id, set_inner_html};
use crate::models::StatsDetail;
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::utils::format::escape_html;
use crate::utils::i18n::t;
use crate::utils::Language;
use crate::views::toast::{show_toast, ToastKind};

fn row_html(label: &str, count: i64) -> String {
    format!(
        r#"<div class="flex justify-between items-center py-2 border-b border-gray-700">
            <span class="text-gray-400">{}</span>
            <span class="font-semibold text-white text-lg">{}</span>
        </div>"#,
        escape_html(label),
        count
    )
}

/// HTML de ambos paneles de estadísticas
pub fn statistics_html(detail: &StatsDetail, lang: Language) -> String {
    let by_status: String = detail
        .by_status
        .iter()
        .map(|(status, count)| {
            row_html(&t(lang, &format!("status.{}", status.to_lowercase())), *count)
        })
        .collect();

    let top_categories: String = detail
        .top_categories
        .iter()
        .map(|cat| row_html(cat.category.as_deref().unwrap_or("N/A"), cat.count))
        .collect();

    format!(
        r#"<div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-gray-800 rounded-xl p-6 shadow-sm border border-gray-700">
                <h3 class="text-lg font-semibold text-white mb-6">{by_status_title}</h3>
                <div class="space-y-4">{by_status}</div>
            </div>
            <div class="bg-gray-800 rounded-xl p-6 shadow-sm border border-gray-700">
                <h3 class="text-lg font-semibold text-white mb-6">{top_categories_title}</h3>
                <div class="space-y-4">{top_categories}</div>
            </div>
        </div>"#,
        by_status_title = t(lang, "statistics.byStatus"),
        by_status = by_status,
        top_categories_title = t(lang, "statistics.topCategories"),
        top_categories = top_categories,
    )
}

pub async fn load(api: &ApiClient, session: &SessionState) {
    match api.get_detailed_stats().await {
        Ok(detail) => {
            if let Some(container) = get_element_by_id("stats-content") {
                set_inner_html(&container, &statistics_html(&detail, session.language()));
            }
        }
        Err(e) => {
            log::error!("❌ Error cargando estadísticas: {}", e);
            show_toast("Failed to load statistics", ToastKind::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryCount;
    use std::collections::BTreeMap;

    #[test]
    fn statistics_render_translated_statuses_and_categories() {
        let mut by_status = BTreeMap::new();
        by_status.insert("Ordered".to_string(), 4);
        by_status.insert("Shipped".to_string(), 2);
        let detail = StatsDetail {
            by_status,
            top_categories: vec![CategoryCount {
                category: Some("Möbel".to_string()),
                count: 7,
            }],
        };

        let html = statistics_html(&detail, Language::De);
        assert!(html.contains("Bestellt"));
        assert!(html.contains("Versendet"));
        assert!(html.contains("Möbel"));
        assert!(html.contains(">7<"));
    }

    #[test]
    fn empty_detail_still_renders_both_panels() {
        let detail = StatsDetail {
            by_status: BTreeMap::new(),
            top_categories: Vec::new(),
        };
        let html = statistics_html(&detail, Language::En);
        assert!(html.contains("By Status"));
        assert!(html.contains("Top Categories"));
    }
}
