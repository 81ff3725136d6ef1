//! Database operations for kittens
//!
//! Lookups return `Option`; deletion reports whether a row went away.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::kitten::{KittenView, NewKitten};

/// Kitten row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Kitten {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
    /// Set once at creation from the authenticated caller
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Kitten {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    pub fn view(&self) -> KittenView {
        KittenView {
            name: self.name.clone(),
            age: self.age,
            color: self.color.clone(),
        }
    }
}

/// Insert a kitten owned by `owner_id`
pub async fn create_kitten(
    pool: &SqlitePool,
    owner_id: Uuid,
    kitten: &NewKitten,
) -> Result<Kitten, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Kitten>(
        r#"
        INSERT INTO kittens (name, age, color, owner_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, age, color, owner_id, created_at, updated_at
        "#,
    )
    .bind(&kitten.name)
    .bind(kitten.age)
    .bind(&kitten.color)
    .bind(owner_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a kitten by id
pub async fn get_kitten_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Kitten>, sqlx::Error> {
    sqlx::query_as::<_, Kitten>(
        r#"
        SELECT id, name, age, color, owner_id, created_at, updated_at
        FROM kittens
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a kitten by id
///
/// Returns `false` if there was no such kitten.
pub async fn delete_kitten(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM kittens WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
