//! SecretScan plugin server: RPC handlers, configuration and the
//! lifecycle coordinator that owns the Unix socket.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
