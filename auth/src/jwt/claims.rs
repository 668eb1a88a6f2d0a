use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Registered RFC 7519 claims (`iss`, `sub`, `iat`, `exp`) plus the username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer (service identifier)
    pub iss: String,

    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    pub username: String,
}

impl Claims {
    /// Create claims for a user, valid for `validity` starting at `issued_at`.
    ///
    /// # Arguments
    /// * `issuer` - Service identifier placed in `iss`
    /// * `user_id` - Unique user identifier placed in `sub`
    /// * `username` - Username
    /// * `issued_at` - Issuance instant
    /// * `validity` - Token lifetime
    pub fn for_user(
        issuer: impl ToString,
        user_id: impl ToString,
        username: impl ToString,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        Self {
            iss: issuer.to_string(),
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
            username: username.to_string(),
        }
    }
}
