//! Common test utilities and helpers
//!
//! Shared by the integration test binaries:
//! - In-memory database and test server fixtures
//! - Authentication helpers (register, bearer headers)

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
