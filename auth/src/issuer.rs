use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Issues signed, time-bounded access tokens.
///
/// Holds the signing secret, the issuer name and the validity window.
/// All three are fixed at construction.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    issuer: String,
    validity: Duration,
}

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// JWT access token
    pub access_token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    pub const DEFAULT_ISSUER: &'static str = "cloudtv";

    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret used to sign tokens
    /// * `issuer` - Value of the `iss` claim
    /// * `validity` - Lifetime of every issued token
    pub fn new(secret: &[u8], issuer: impl Into<String>, validity: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            issuer: issuer.into(),
            validity,
        }
    }

    /// Issue a token for a user, starting now.
    ///
    /// # Errors
    /// * `EmptySecret` - Issuer was built with an empty secret
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, user_id: impl ToString, username: &str) -> Result<IssuedToken, JwtError> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// Issue a token for a user with an explicit issuance instant.
    pub fn issue_at(
        &self,
        user_id: impl ToString,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_user(&self.issuer, user_id, username, issued_at, self.validity);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            issued_at,
            expires_at: issued_at + self.validity,
        })
    }

    /// Validate and decode a token signed by this issuer.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Signature is invalid or token is malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
