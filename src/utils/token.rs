use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::user::User;

/// The authenticated identity for one request: user id, username, email,
/// role and display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub name: String,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse()
            .map_err(|_| Error::Unauthorized("Invalid token subject".to_string()))
    }

    pub fn has_role(&self, allowed: &[&str]) -> bool {
        allowed.iter().any(|r| r.eq_ignore_ascii_case(&self.role))
    }
}

pub fn create_token(user: &User, secret: &str, ttl_hours: i64) -> Result<String> {
    let exp = (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        name: format!("{} {}", user.first_name, user.last_name),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Token creation failed: {}", e)))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn demo_user() -> User {
        User {
            id: 3,
            username: "candidate".into(),
            email: "candidate@recruitwarx.com".into(),
            password_hash: "x".into(),
            role: "candidate".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            phone: None,
            profile_image: None,
            bio: None,
            skills: None,
            work_experience: None,
            education: None,
            experience_years: 0,
            location: None,
            profile_views: 0,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_roundtrip_preserves_identity() {
        let token = create_token(&demo_user(), "test_secret", 24).unwrap();
        let claims = decode_token(&token, "test_secret").unwrap();
        assert_eq!(claims.user_id().unwrap(), 3);
        assert_eq!(claims.username, "candidate");
        assert_eq!(claims.role, "candidate");
        assert_eq!(claims.name, "John Doe");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(&demo_user(), "test_secret", 24).unwrap();
        assert!(decode_token(&token, "other_secret").is_err());
    }

    #[test]
    fn role_check_is_case_insensitive() {
        let token = create_token(&demo_user(), "s", 1).unwrap();
        let claims = decode_token(&token, "s").unwrap();
        assert!(claims.has_role(&["Candidate", "admin"]));
        assert!(!claims.has_role(&["admin", "recruiter"]));
    }
}
