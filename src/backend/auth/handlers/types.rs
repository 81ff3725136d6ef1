/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`
#[derive(Deserialize, Serialize, Clone)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub type RegisterRequest = CredentialsRequest;
pub type LoginRequest = CredentialsRequest;

/// Successful register/login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

impl AuthResponse {
    pub fn success(token: String) -> Self {
        Self {
            message: "success".to_string(),
            token,
        }
    }
}
