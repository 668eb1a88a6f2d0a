use async_trait::async_trait;

use crate::domain::auth::errors::SignupError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::SignupParams;
use crate::domain::auth::models::SignupResult;
use crate::domain::auth::models::User;

/// Signup operations exposed to inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue an access token.
    ///
    /// # Arguments
    /// * `params` - Raw signup input
    ///
    /// # Returns
    /// Access token, new user ID and token expiry
    ///
    /// # Errors
    /// * `Validation` - One or more input rules were broken
    /// * `Conflict` - Username or email is already registered
    /// * `Internal` - Hashing, persistence or signing failed
    async fn signup(&self, params: SignupParams) -> Result<SignupResult, SignupError>;
}

/// Persistence capability needed by signup.
///
/// Implementations must enforce username and email uniqueness atomically.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user. The store assigns the id.
    ///
    /// # Arguments
    /// * `user` - Row to insert
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Conflict` - Username or email is already taken
    /// * `Database` - Any other storage failure
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
}
