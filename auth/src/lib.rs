//! Authentication utilities library
//!
//! Provides the credential primitives used at signup:
//! - Password hashing (raw Argon2id key + separate salt, base64 encoded)
//! - JWT token encoding and validation (HS256)
//! - Token issuance with a fixed issuer and validity window
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashingParams, PasswordHasher};
//!
//! let params = HashingParams { iterations: 1, memory_kib: 64, parallelism: 1, ..HashingParams::default() };
//! let hasher = PasswordHasher::new(params).unwrap();
//! let hashed = hasher.hash("my_password").unwrap();
//! assert_ne!(hashed.hash, "my_password");
//! ```
//!
//! ## Issuing Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", "cloudtv", Duration::hours(1));
//! let issued = issuer.issue("user123", "alice").unwrap();
//! let claims = issuer.decode(&issued.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashedPassword;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
