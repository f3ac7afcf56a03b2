use axum::{Json, extract::State};
use secretscan_core::api::types::{JobReports, StopScanRequest, StopScanResult};
use tracing::{error, info};

use crate::infra::app_state::AppState;

pub async fn report_jobs_status_handler(
    State(state): State<AppState>,
) -> Json<JobReports> {
    Json(JobReports::from_count(state.registry().count()))
}

/// Deliver a cooperative stop signal. An unknown scan is reported through
/// `success = false`, never as a transport error.
pub async fn stop_scan_handler(
    State(state): State<AppState>,
    Json(request): Json<StopScanRequest>,
) -> Json<StopScanResult> {
    let plugin = &state.config.plugin_name;
    let scan_id = request.scan_id.trim();

    let Some(context) = state.registry().lookup(scan_id) else {
        error!(
            scan_id,
            "failed to stop scan, may have already completed successfully or errored out"
        );
        return Json(StopScanResult {
            success: false,
            description: format!(
                "{plugin}::Failed to stop scan, may have already completed or errored out"
            ),
        });
    };

    let first_request = context.request_stop();
    info!(scan_id, first_request, "stop request submitted");

    Json(StopScanResult {
        success: true,
        description: format!("{plugin}::Stop request submitted"),
    })
}
