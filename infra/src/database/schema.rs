//! Schema bootstrap
//!
//! Tables are created on start-up when missing. Emails and slugs use a
//! binary collation so uniqueness is case-sensitive.

use sqlx::MySqlPool;

use crate::InfrastructureError;

pub(crate) const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(254) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        verify_otp VARCHAR(6) NULL,
        verify_otp_expires_at BIGINT NOT NULL DEFAULT 0,
        reset_otp VARCHAR(6) NULL,
        reset_otp_expires_at BIGINT NOT NULL DEFAULT 0,
        avatar_url TEXT NULL,
        avatar_public_id VARCHAR(255) NULL,
        created_at TIMESTAMP(3) NOT NULL,
        updated_at TIMESTAMP(3) NOT NULL,
        UNIQUE KEY uq_users_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

pub(crate) const CREATE_BLOGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS blogs (
        id CHAR(36) NOT NULL PRIMARY KEY,
        author_id CHAR(36) NOT NULL,
        title VARCHAR(200) NOT NULL,
        slug VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        summary TEXT NULL,
        content LONGTEXT NOT NULL,
        cover_image_url TEXT NULL,
        cover_image_public_id VARCHAR(255) NULL,
        tags TEXT NOT NULL,
        is_published BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP(3) NOT NULL,
        updated_at TIMESTAMP(3) NOT NULL,
        UNIQUE KEY uq_blogs_slug (slug),
        KEY idx_blogs_author (author_id),
        KEY idx_blogs_published_created (is_published, created_at),
        CONSTRAINT fk_blogs_author FOREIGN KEY (author_id) REFERENCES users (id)
            ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Create the `users` and `blogs` tables if they do not exist
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for statement in [CREATE_USERS_TABLE, CREATE_BLOGS_TABLE] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
