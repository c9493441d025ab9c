use sqlx::PgPool;

use crate::dto::message_dto::SendMessagePayload;
use crate::error::{Error, Result};
use crate::models::message::Message;

#[derive(Clone)]
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn send(&self, sender_id: i64, payload: SendMessagePayload) -> Result<i64> {
        let receiver: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = $1 AND is_active = TRUE")
                .bind(payload.receiver_id)
                .fetch_optional(&self.pool)
                .await?;
        if receiver.is_none() {
            return Err(Error::NotFound("Receiver not found".to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (sender_id, receiver_id, subject, body, application_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(sender_id)
        .bind(payload.receiver_id)
        .bind(&payload.subject)
        .bind(&payload.body)
        .bind(payload.application_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Both directions of the two-party thread, oldest first.
    pub async fn conversation(&self, user_id: i64, other_id: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY sent_at ASC
            "#,
        )
        .bind(user_id)
        .bind(other_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn mark_read(&self, receiver_id: i64, sender_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE \
             WHERE receiver_id = $1 AND sender_id = $2 AND is_read = FALSE",
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn unread_count(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
