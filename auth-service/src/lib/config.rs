use std::env;
use std::path::Path;

use auth::HashingParams;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_grpc_port")]
    pub grpc_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_expiration_seconds")]
    pub expiration_seconds: i64,
}

/// Argon2id cost parameters
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub iterations: u32,
    pub memory_kib: u32,
    pub parallelism: u32,
    pub output_len: usize,
    pub salt_len: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        HashingParams::default().into()
    }
}

impl From<HashingParams> for PasswordConfig {
    fn from(params: HashingParams) -> Self {
        Self {
            iterations: params.iterations,
            memory_kib: params.memory_kib,
            parallelism: params.parallelism,
            output_len: params.output_len,
            salt_len: params.salt_len,
        }
    }
}

impl From<&PasswordConfig> for HashingParams {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            iterations: config.iterations,
            memory_kib: config.memory_kib,
            parallelism: config.parallelism,
            output_len: config.output_len,
            salt_len: config.salt_len,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_http_port() -> u16 {
    8080
}

fn default_grpc_port() -> u16 {
    50051
}

fn default_issuer() -> String {
    auth::TokenIssuer::DEFAULT_ISSUER.to_string()
}

fn default_expiration_seconds() -> i64 {
    3600
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__GRPC_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Variables from a `.env` file in the working directory are exported first.
    pub fn load() -> Result<Self, ConfigError> {
        load_env_file(Path::new(".env"));

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the service cannot start with.
    ///
    /// # Errors
    /// * `Message` - Signing secret is empty or token lifetime is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is missing (set JWT__SECRET)".to_string(),
            ));
        }
        if self.jwt.expiration_seconds <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_seconds must be positive, got {}",
                self.jwt.expiration_seconds
            )));
        }
        Ok(())
    }

    pub fn token_validity(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.jwt.expiration_seconds)
    }

    pub fn hashing_params(&self) -> HashingParams {
        HashingParams::from(&self.password)
    }
}

/// Export variables from a dotenv file into the process environment.
///
/// Variables already set in the environment win. A missing file is not an error.
fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded environment file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load environment file");
            false
        }
    }
}
