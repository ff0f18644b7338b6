use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use crate::app::dto::{HealthResponse, InfoResponse, MessageResponse};
use crate::app::services::AppServices;

pub const WELCOME_MESSAGE: &str = "Welcome to the Toolshop API!";

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn info(Extension(services): Extension<Arc<AppServices>>) -> Json<InfoResponse> {
    Json(InfoResponse::from(services.info()))
}
