use sqlx::PgPool;

use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::user::{User, ALL_ROLES};
use crate::utils::crypto::{hash_password, verify_password};

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<i64> {
        if !ALL_ROLES.contains(&payload.role.as_str()) {
            return Err(Error::BadRequest(format!(
                "Invalid role: {}",
                payload.role
            )));
        }

        let taken: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE username = $1 OR email = $2")
                .bind(&payload.username)
                .bind(&payload.email)
                .fetch_optional(&self.pool)
                .await?;
        if taken.is_some() {
            return Err(Error::Conflict(
                "Username or email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&payload.password)?;
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password_hash, role, first_name, last_name, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(&payload.role)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Looks up an active account by username or email and checks the
    /// password. Both failure modes return the same error so the response
    /// never reveals which part was wrong.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE (username = $1 OR email = $1) AND is_active = TRUE",
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Err(Error::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(Error::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        user.ok_or_else(|| Error::NotFound("User not found".to_string()))
    }
}
