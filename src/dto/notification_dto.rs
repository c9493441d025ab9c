use serde::{Deserialize, Serialize};

use crate::models::notification::Notification;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub success: bool,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadNotificationsResponse {
    pub success: bool,
    pub unread: i64,
}
