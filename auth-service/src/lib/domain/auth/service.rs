use std::sync::Arc;

use async_trait::async_trait;
use auth::HashedPassword;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::auth::errors::SignupError;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::SignupParams;
use crate::domain::auth::models::SignupResult;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserStore;
use crate::domain::auth::validation::validate_signup;

/// Domain service implementation for signup.
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct AuthService<US>
where
    US: UserStore,
{
    store: Arc<US>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<US> AuthService<US>
where
    US: UserStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `password_hasher` - Configured Argon2id hasher
    /// * `token_issuer` - Signs access tokens with the service secret
    pub fn new(store: Arc<US>, password_hasher: PasswordHasher, token_issuer: TokenIssuer) -> Self {
        Self {
            store,
            password_hasher,
            token_issuer,
        }
    }

    // Argon2 with production costs takes tens of milliseconds, keep it off the runtime threads
    async fn hash_password(&self, password: String) -> Result<HashedPassword, SignupError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| SignupError::Internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| SignupError::Internal(format!("error hashing the password: {}", e)))
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserStore,
{
    async fn signup(&self, params: SignupParams) -> Result<SignupResult, SignupError> {
        if let Err(err) = validate_signup(&params) {
            tracing::warn!(
                username = %params.username,
                fields = ?err.fields(),
                "Signup rejected: invalid input"
            );
            return Err(err.into());
        }

        let SignupParams {
            username,
            email,
            password,
            ..
        } = params;

        let hashed = self.hash_password(password).await.inspect_err(|e| {
            tracing::error!(username = %username, error = %e, "Signup failed at password hashing");
        })?;

        let new_user = NewUser {
            username,
            email,
            password_hash: hashed.hash,
            password_salt: hashed.salt,
        };

        let user = self
            .store
            .create_user(new_user)
            .await
            .map_err(SignupError::from)
            .inspect_err(|e| match e {
                SignupError::Conflict => {
                    tracing::warn!("Signup rejected: username or email already registered")
                }
                _ => tracing::error!(error = %e, "Signup failed at user creation"),
            })?;

        let issued = self
            .token_issuer
            .issue(user.id, &user.username)
            .map_err(|e| SignupError::Internal(format!("error creating a JWT: {}", e)))
            .inspect_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Signup failed at token issuance");
            })?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User signed up"
        );

        Ok(SignupResult {
            token: issued.access_token,
            user_id: user.id,
            expires_at: issued.expires_at,
        })
    }
}
