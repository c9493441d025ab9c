use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub subject: Option<String>,
    pub body: String,
    pub application_id: Option<i64>,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}
