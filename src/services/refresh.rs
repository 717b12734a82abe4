// ============================================================================
// REFRESH ORCHESTRATOR - Registro de secciones y consistencia entre pantallas
// ============================================================================
// Cada operación mutadora declara qué scopes puede haber ensuciado; el
// orquestador recarga SOLO la sección activa (consistencia lazy: una sección
// oculta se re-fetchea al navegar hacia ella, nunca antes). Centraliza las
// cadenas "if currentSection == ..." que antes duplicaba cada pantalla.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Sección lógica cuya vista cacheada puede quedar stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Orders,
    Tracking,
    Statistics,
}

impl Section {
    /// ID del contenedor DOM de la sección
    pub fn container_id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Orders => "orders",
            Section::Tracking => "tracking",
            Section::Statistics => "statistics",
        }
    }

    /// ID del item de navegación asociado
    pub fn nav_id(&self) -> &'static str {
        match self {
            Section::Dashboard => "nav-dashboard",
            Section::Orders => "nav-orders",
            Section::Tracking => "nav-tracking",
            Section::Statistics => "nav-statistics",
        }
    }

    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Orders,
        Section::Tracking,
        Section::Statistics,
    ];
}

type Loader = Rc<dyn Fn()>;

/// Registro estático de secciones + puntero a la sección activa.
/// Los load functions son closures cero-arg que disparan su fetch async.
#[derive(Clone)]
pub struct RefreshOrchestrator {
    active: Rc<Cell<Section>>,
    loaders: Rc<RefCell<Vec<(Section, Loader)>>>,
}

impl RefreshOrchestrator {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(Section::Dashboard)),
            loaders: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Registrar el load function de una sección (una vez, al arranque)
    pub fn register<F>(&self, section: Section, loader: F)
    where
        F: Fn() + 'static,
    {
        self.loaders.borrow_mut().push((section, Rc::new(loader)));
    }

    pub fn active_section(&self) -> Section {
        self.active.get()
    }

    /// Navegar a una sección: mueve el puntero y recarga SIEMPRE esa sección
    /// (cada entrada es un re-fetch completo, sin patching incremental)
    pub fn show_section(&self, section: Section) {
        self.active.set(section);
        log::info!("🧭 Sección activa: {:?}", section);
        self.load(section);
    }

    /// Señal "algo cambió": las operaciones mutadoras la invocan tras un
    /// remote call EXITOSO, declarando los scopes afectados. Solo se recarga
    /// un scope si es la sección visible; el resto queda lazy.
    pub fn notify_mutated(&self, scopes: &[Section]) {
        let active = self.active.get();
        if scopes.contains(&active) {
            log::info!("🔄 Scope mutado coincide con sección activa, recargando {:?}", active);
            self.load(active);
        }
    }

    fn load(&self, section: Section) {
        let loader = self
            .loaders
            .borrow()
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, l)| l.clone());

        match loader {
            Some(loader) => loader(),
            None => log::warn!("⚠️ Sección {:?} sin load function registrado", section),
        }
    }
}

impl Default for RefreshOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orquestador con loaders que solo cuentan invocaciones
    fn recording() -> (RefreshOrchestrator, Rc<RefCell<Vec<Section>>>) {
        let orchestrator = RefreshOrchestrator::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        for section in Section::ALL {
            let calls = calls.clone();
            orchestrator.register(section, move || calls.borrow_mut().push(section));
        }
        (orchestrator, calls)
    }

    #[test]
    fn mutation_scope_not_matching_active_section_is_lazy() {
        let (orchestrator, calls) = recording();
        orchestrator.show_section(Section::Dashboard);
        calls.borrow_mut().clear();

        // Editar un pedido mientras el dashboard está visible: la sección
        // orders NO se recarga (se re-fetchea al navegar hacia ella)
        orchestrator.notify_mutated(&[Section::Orders]);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn mutation_scope_matching_active_section_reloads_it() {
        let (orchestrator, calls) = recording();
        orchestrator.show_section(Section::Dashboard);
        calls.borrow_mut().clear();

        orchestrator.notify_mutated(&[Section::Dashboard, Section::Orders]);
        assert_eq!(*calls.borrow(), vec![Section::Dashboard]);
    }

    #[test]
    fn navigation_always_refetches_target_section() {
        let (orchestrator, calls) = recording();
        orchestrator.show_section(Section::Tracking);
        orchestrator.show_section(Section::Tracking);
        assert_eq!(*calls.borrow(), vec![Section::Tracking, Section::Tracking]);
        assert_eq!(orchestrator.active_section(), Section::Tracking);
    }

    #[test]
    fn at_most_one_reload_per_notification() {
        let (orchestrator, calls) = recording();
        orchestrator.show_section(Section::Orders);
        calls.borrow_mut().clear();

        orchestrator.notify_mutated(&[
            Section::Dashboard,
            Section::Orders,
            Section::Tracking,
        ]);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn clones_share_active_pointer_and_registry() {
        let (orchestrator, calls) = recording();
        let clone = orchestrator.clone();
        clone.show_section(Section::Statistics);
        assert_eq!(orchestrator.active_section(), Section::Statistics);

        calls.borrow_mut().clear();
        orchestrator.notify_mutated(&[Section::Statistics]);
        assert_eq!(*calls.borrow(), vec![Section::Statistics]);
    }
}
