// ============================================================================
// MODELS - Estructuras compartidas con el backend
// ============================================================================

pub mod notification;
pub mod order;
pub mod stats;

pub use notification::*;
pub use order::*;
pub use stats::*;
