//! Kitten wire types
//!
//! Request and response bodies for the `/kittens` endpoints. The owner of a
//! kitten never appears in any of these types: it is taken from the
//! authenticated caller on create and never echoed back.

use serde::{Deserialize, Serialize};

/// Body of `POST /kittens`
///
/// Unknown fields (including any attempt to pass an owner) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewKitten {
    pub name: String,
    pub age: i64,
    pub color: String,
}

/// Body returned by `GET /kittens/{id}` and `POST /kittens`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KittenView {
    pub name: String,
    pub age: i64,
    pub color: String,
}
