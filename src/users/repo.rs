use crate::users::repo_types::{Gender, User};
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, username, password_hash, gender, profile_pic, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password and derived profile picture.
    pub async fn create(
        db: &PgPool,
        full_name: &str,
        username: &str,
        password_hash: &str,
        gender: Gender,
        profile_pic: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, username, password_hash, gender, profile_pic)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, username, password_hash, gender, profile_pic, created_at
            "#,
        )
        .bind(full_name)
        .bind(username)
        .bind(password_hash)
        .bind(gender)
        .bind(profile_pic)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// All users except the given one, for the contact sidebar.
    pub async fn list_except(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, username, password_hash, gender, profile_pic, created_at
            FROM users
            WHERE id <> $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

/// True when the error is the unique constraint rejecting a duplicate
/// username, i.e. a concurrent signup won the race against our pre-check.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.code())
        .map_or(false, |code| code == "23505")
}
