// ============================================================================
// VIEWS - Render de secciones y widgets globales
// ============================================================================

pub mod dashboard;
pub mod notifications;
pub mod orders;
pub mod statistics;
pub mod toast;
pub mod tracking;

use crate::dom::{get_element_by_id, hide_element, show_element};
use crate::services::{RefreshOrchestrator, Section};

const NAV_ACTIVE_CLASSES: [&str; 4] = ["active", "bg-blue-900/50", "border-l-4", "border-blue-500"];

/// Navegar a una sección: visibilidad de contenedores, resaltado del nav
/// y recarga vía orquestador (cada entrada es un re-fetch completo)
pub fn navigate_to(orchestrator: &RefreshOrchestrator, section: Section) {
    for other in Section::ALL {
        hide_element(other.container_id());
        if let Some(nav) = get_element_by_id(other.nav_id()) {
            for class in NAV_ACTIVE_CLASSES {
                let _ = nav.class_list().remove_1(class);
            }
        }
    }

    show_element(section.container_id());
    if let Some(nav) = get_element_by_id(section.nav_id()) {
        for class in NAV_ACTIVE_CLASSES {
            let _ = nav.class_list().add_1(class);
        }
    }

    orchestrator.show_section(section);
}
