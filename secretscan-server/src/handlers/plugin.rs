use axum::{Json, extract::State};
use secretscan_core::api::types::{Name, Uid};

use crate::infra::app_state::AppState;

pub async fn get_name_handler(State(state): State<AppState>) -> Json<Name> {
    Json(Name {
        value: state.config.plugin_name.clone(),
    })
}

pub async fn get_uid_handler(State(state): State<AppState>) -> Json<Uid> {
    Json(Uid {
        value: state.config.uid(),
    })
}
