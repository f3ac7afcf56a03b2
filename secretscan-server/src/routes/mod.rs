use axum::{Router, routing::post};
use secretscan_core::api::routes::v1;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{plugin, scanners, secret_scanner},
    infra::app_state::AppState,
};

/// Create the RPC router exposed on the plugin socket
pub fn create_rpc_router(state: AppState) -> Router {
    Router::new()
        .route(v1::agent_plugin::NAME, post(plugin::get_name_handler))
        .route(v1::agent_plugin::UID, post(plugin::get_uid_handler))
        .route(
            v1::scanners::JOBS_STATUS,
            post(scanners::report_jobs_status_handler),
        )
        .route(v1::scanners::STOP_SCAN, post(scanners::stop_scan_handler))
        .route(
            v1::secret_scanner::FIND_SECRET_INFO,
            post(secret_scanner::find_secret_info_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
