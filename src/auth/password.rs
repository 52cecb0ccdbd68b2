use crate::error::AppError;
use bcrypt::{hash, verify};

/// Produces a salted bcrypt digest of `password`. The cost factor comes from
/// configuration (`SALT_ROUNDS`).
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Compares a plaintext password against a stored digest.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
