//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, email, display_name, role, created_at";

/// Writes to the local user projection.
///
/// The trash view reads it through a join; nothing else queries it.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, display_name, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }
}
