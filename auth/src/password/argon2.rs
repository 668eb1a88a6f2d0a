use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::PasswordError;

/// Cost parameters for Argon2id key derivation.
///
/// Constructed once at startup and handed to [`PasswordHasher::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Number of passes over memory (t_cost)
    pub iterations: u32,
    /// Memory cost in KiB (m_cost)
    pub memory_kib: u32,
    /// Degree of parallelism (p_cost)
    pub parallelism: u32,
    /// Length of the derived key in bytes
    pub output_len: usize,
    /// Length of the random salt in bytes
    pub salt_len: usize,
}

impl HashingParams {
    pub const DEFAULT_ITERATIONS: u32 = 3;
    pub const DEFAULT_MEMORY_KIB: u32 = 64 * 1024;
    pub const DEFAULT_PARALLELISM: u32 = 4;
    pub const DEFAULT_OUTPUT_LEN: usize = 32;
    pub const DEFAULT_SALT_LEN: usize = 16;
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            memory_kib: Self::DEFAULT_MEMORY_KIB,
            parallelism: Self::DEFAULT_PARALLELISM,
            output_len: Self::DEFAULT_OUTPUT_LEN,
            salt_len: Self::DEFAULT_SALT_LEN,
        }
    }
}

/// Password hash and salt, both base64 encoded for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub hash: String,
    pub salt: String,
}

/// Password hashing implementation.
///
/// Derives a raw Argon2id key from the password and a fresh random salt.
/// The salt is stored next to the hash rather than embedded in a PHC string.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: HashingParams,
}

impl PasswordHasher {
    /// Create a new password hasher.
    ///
    /// # Arguments
    /// * `params` - Argon2id cost parameters
    ///
    /// # Errors
    /// * `InvalidParameters` - Parameters are rejected by Argon2 (e.g. memory below 8 * parallelism)
    pub fn new(params: HashingParams) -> Result<Self, PasswordError> {
        if params.salt_len < argon2::MIN_SALT_LEN {
            return Err(PasswordError::InvalidParameters(format!(
                "salt length must be at least {} bytes, got {}",
                argon2::MIN_SALT_LEN,
                params.salt_len
            )));
        }

        // Reject bad cost parameters at construction instead of on first signup
        Self::argon2(&params)?;

        Ok(Self { params })
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Base64 encoded derived key and salt
    ///
    /// # Errors
    /// * `SaltGenerationFailed` - The OS random source failed
    /// * `HashingFailed` - Key derivation failed
    pub fn hash(&self, password: &str) -> Result<HashedPassword, PasswordError> {
        let mut salt = vec![0u8; self.params.salt_len];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::SaltGenerationFailed(e.to_string()))?;

        let key = self.derive(password.as_bytes(), &salt)?;

        Ok(HashedPassword {
            hash: STANDARD.encode(key),
            salt: STANDARD.encode(salt),
        })
    }

    fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>, PasswordError> {
        let mut key = vec![0u8; self.params.output_len];
        Self::argon2(&self.params)?
            .hash_password_into(password, salt, &mut key)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        Ok(key)
    }

    fn argon2(params: &HashingParams) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            Some(params.output_len),
        )
        .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
