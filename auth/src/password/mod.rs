pub mod argon2;
pub mod errors;

pub use argon2::HashedPassword;
pub use argon2::HashingParams;
pub use argon2::PasswordHasher;
pub use errors::PasswordError;
