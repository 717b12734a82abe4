// ============================================================================
// VIEWMODELS - Derivaciones render-ready de payloads crudos del backend
// ============================================================================

pub mod tracking;
