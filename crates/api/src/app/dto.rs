use serde::{Deserialize, Serialize};

// -------------------------
// Response DTOs
// -------------------------

/// Body of `GET /` and `DELETE /items/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl From<&crate::app::services::AppInfo> for InfoResponse {
    fn from(info: &crate::app::services::AppInfo) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            version: info.version.clone(),
        }
    }
}
