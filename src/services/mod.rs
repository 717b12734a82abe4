// ============================================================================
// SERVICES - Comunicación API, polling y orquestación de refresh
// ============================================================================

pub mod api_client;
pub mod notification_poller;
pub mod order_actions;
pub mod refresh;

pub use api_client::*;
pub use notification_poller::*;
pub use order_actions::*;
pub use refresh::*;
