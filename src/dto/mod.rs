pub mod application_dto;
pub mod auth_dto;
pub mod dashboard_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod message_dto;
pub mod notification_dto;
pub mod profile_dto;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement envelope used by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
