use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),

    #[error("Salt generation failed: {0}")]
    SaltGenerationFailed(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
