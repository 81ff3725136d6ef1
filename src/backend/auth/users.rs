/**
 * User Model and Database Operations
 *
 * Users are created on registration and looked up on login. There is no
 * update or delete path.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt), never sent to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Errors
/// Fails with a unique violation if the username is taken.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, username, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at, updated_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_in_memory;

    #[tokio::test]
    async fn test_create_and_find_user() {
        let pool = connect_in_memory().await.unwrap();

        let user = create_user(&pool, "buster", "$2b$04$hash").await.unwrap();
        assert_eq!(user.username, "buster");

        let by_name = get_user_by_username(&pool, "buster").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert_eq!(by_name.password_hash, "$2b$04$hash");
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let pool = connect_in_memory().await.unwrap();

        assert!(get_user_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let pool = connect_in_memory().await.unwrap();

        create_user(&pool, "buster", "hash").await.unwrap();
        let err = create_user(&pool, "buster", "other").await.unwrap_err();
        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("Expected database error, got {:?}", other),
        }
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "buster".to_string(),
            password_hash: "secret-hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
