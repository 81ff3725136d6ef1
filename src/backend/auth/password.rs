/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. Hashes are salted per call and carry their
 * cost, so verification needs nothing but the stored string.
 *
 * bcrypt is deliberately slow, so the async entry points move the work to
 * tokio's blocking pool.
 */

use crate::backend::auth::error::AuthError;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

/// Work factor bounds accepted by bcrypt
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Hash a password synchronously
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(plaintext, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a password synchronously
///
/// Any bcrypt error (for example a corrupt stored hash) counts as a mismatch.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    match bcrypt::verify(plaintext, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Password verification error: {:?}", e);
            false
        }
    }
}

/// Password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher, clamping `cost` into bcrypt's accepted range
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` on the blocking pool
    pub async fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&plaintext, cost))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// Verify `plaintext` against a stored hash on the blocking pool
    pub async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        match tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
