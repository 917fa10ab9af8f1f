use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn status(State(state): State<AppState>) -> ApiSuccess<StatusResponseData> {
    let chain = state.chain_gateway.status().await;

    ApiSuccess::new(
        StatusCode::OK,
        StatusResponseData {
            api_status: "online".to_string(),
            chain_connected: chain.connected,
            current_block: chain.current_block,
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub api_status: String,
    pub chain_connected: bool,
    pub current_block: Option<u64>,
    pub version: String,
}
