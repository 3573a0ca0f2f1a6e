//! Password hashing with bcrypt

use crate::errors::{DomainError, DomainResult};

/// Hashes and checks passwords at a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh salt
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Verify a password against a stored hash
    ///
    /// A malformed stored hash is an internal error, not a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}
