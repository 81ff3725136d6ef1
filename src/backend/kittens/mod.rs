//! Kittens Module
//!
//! The one resource of the service. Every kitten has an owner, fixed at
//! creation; only that owner may read or delete it.
//!
//! - **`db`** - Kitten row type and store operations
//! - **`handlers`** - `POST /kittens`, `GET /kittens/{id}`, `DELETE /kittens/{id}`

pub mod db;

pub mod handlers;

pub use db::Kitten;
pub use handlers::{create_kitten, delete_kitten, get_kitten};
