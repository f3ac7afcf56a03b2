use axum::{Json, extract::State};
use secretscan_core::api::types::{FindRequest, FindResult};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Start a scan and acknowledge immediately. Findings are reported out of
/// band, not through this response.
pub async fn find_secret_info_handler(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> AppResult<Json<FindResult>> {
    state.dispatcher.start_scan(request)?;
    Ok(Json(FindResult::default()))
}
