//! MySQL implementation of the UserRepository trait.
//!
//! Each one-time-code slot is stored as a nullable code column plus a
//! BIGINT expiry in epoch milliseconds, where 0 means no pending code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use scribe_core::domain::entities::one_time_code::OneTimeCode;
use scribe_core::domain::entities::user::User;
use scribe_core::errors::DomainError;
use scribe_core::repositories::UserRepository;

use super::{column_error, map_read_error, map_write_error};

const USER_COLUMNS: &str = r#"
    id, name, email, password_hash, is_verified,
    verify_otp, verify_otp_expires_at, reset_otp, reset_otp_expires_at,
    avatar_url, avatar_public_id, created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;

        let verify_code: Option<String> = row
            .try_get("verify_otp")
            .map_err(|e| column_error("verify_otp", e))?;
        let verify_expires: i64 = row
            .try_get("verify_otp_expires_at")
            .map_err(|e| column_error("verify_otp_expires_at", e))?;
        let reset_code: Option<String> = row
            .try_get("reset_otp")
            .map_err(|e| column_error("reset_otp", e))?;
        let reset_expires: i64 = row
            .try_get("reset_otp_expires_at")
            .map_err(|e| column_error("reset_otp_expires_at", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| column_error("id", e))?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column_error("password_hash", e))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| column_error("is_verified", e))?,
            verify_otp: OneTimeCode::from_storage(verify_code, verify_expires),
            reset_otp: OneTimeCode::from_storage(reset_code, reset_expires),
            avatar_url: row
                .try_get("avatar_url")
                .map_err(|e| column_error("avatar_url", e))?,
            avatar_public_id: row
                .try_get("avatar_public_id")
                .map_err(|e| column_error("avatar_public_id", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    async fn fetch_one_by(&self, column: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            USER_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn id_exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        let count: i64 = row.try_get("count").map_err(|e| column_error("count", e))?;
        Ok(count > 0)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.fetch_one_by("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_by("email", email.to_string()).await
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let (verify_code, verify_expires) = OneTimeCode::to_storage(user.verify_otp.as_ref());
        let (reset_code, reset_expires) = OneTimeCode::to_storage(user.reset_otp.as_ref());

        let query = if self.id_exists(user.id).await? {
            r#"
                UPDATE users SET
                    name = ?, email = ?, password_hash = ?, is_verified = ?,
                    verify_otp = ?, verify_otp_expires_at = ?,
                    reset_otp = ?, reset_otp_expires_at = ?,
                    avatar_url = ?, avatar_public_id = ?,
                    created_at = ?, updated_at = ?
                WHERE id = ?
            "#
        } else {
            r#"
                INSERT INTO users (
                    name, email, password_hash, is_verified,
                    verify_otp, verify_otp_expires_at,
                    reset_otp, reset_otp_expires_at,
                    avatar_url, avatar_public_id,
                    created_at, updated_at, id
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        };

        sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(verify_code)
            .bind(verify_expires)
            .bind(reset_code)
            .bind(reset_expires)
            .bind(&user.avatar_url)
            .bind(&user.avatar_public_id)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Email already registered"))?;

        tracing::debug!(user_id = %user.id, "User saved");

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        let count: i64 = row.try_get("count").map_err(|e| column_error("count", e))?;
        Ok(count > 0)
    }
}
