use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::message::Message;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessagePayload {
    pub receiver_id: i64,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub body: String,
    pub application_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub success: bool,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadMessagesResponse {
    pub success: bool,
    pub unread: i64,
}
