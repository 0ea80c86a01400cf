//! bcrypt hashing and verification.
//! Thin wrappers over the bcrypt primitive; the async variant runs the
//! computation on a blocking worker so callers suspend at a single
//! await point instead of stalling the runtime.

use bcrypt::{hash, verify};
use tokio::task;

/// Error type for hash operations
#[derive(Debug)]
pub enum HashError {
    /// The bcrypt primitive itself failed (e.g. unsupported work factor)
    Computation(bcrypt::BcryptError),
    /// The blocking worker died before delivering a result
    WorkerFailed(task::JoinError),
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::Computation(err) => write!(f, "{}", err),
            HashError::WorkerFailed(err) => write!(f, "hashing worker failed: {}", err),
        }
    }
}

impl std::error::Error for HashError {}

/// Hash a password using bcrypt at the given work factor
pub fn hash_password(password: &str, cost: u32) -> Result<String, HashError> {
    hash(password, cost).map_err(HashError::Computation)
}

/// Verify a password against a bcrypt hash
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, HashError> {
    verify(password, hashed).map_err(HashError::Computation)
}

/// Hash a password on a blocking worker. bcrypt at a realistic work
/// factor takes hundreds of milliseconds, too long for an async task.
pub async fn hash_password_async(password: String, cost: u32) -> Result<String, HashError> {
    task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(HashError::WorkerFailed)?
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 is bcrypt's minimum; tests use it to stay fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "Admin123!HMA";
        let hashed = hash_password(password, TEST_COST).unwrap();
        assert!(verify_password(password, &hashed).unwrap());
    }

    #[test]
    fn test_salts_differ_between_invocations() {
        let password = "Admin123!HMA";
        let first = hash_password(password, TEST_COST).unwrap();
        let second = hash_password(password, TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password(password, &first).unwrap());
        assert!(verify_password(password, &second).unwrap());
    }

    #[test]
    fn test_hash_format_at_reference_cost() {
        let hashed = hash_password("Admin123!HMA", 12).unwrap();
        assert_eq!(hashed.len(), 60);
        assert!(hashed.starts_with("$2b$12$"));
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hashed = hash_password("Admin123!HMA", TEST_COST).unwrap();
        assert!(!verify_password("Admin123!XYZ", &hashed).unwrap());
    }

    #[test]
    fn test_cost_below_minimum_rejected() {
        assert!(hash_password("Admin123!HMA", 0).is_err());
        assert!(hash_password("Admin123!HMA", 3).is_err());
    }

    #[test]
    fn test_garbage_hash_rejected_on_verify() {
        assert!(verify_password("Admin123!HMA", "not-a-bcrypt-hash").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_verifies_like_sync() {
        let hashed = hash_password_async("Admin123!HMA".to_string(), TEST_COST)
            .await
            .unwrap();
        assert!(verify_password("Admin123!HMA", &hashed).unwrap());
    }
}
