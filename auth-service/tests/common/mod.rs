#![allow(dead_code)]

use std::sync::Arc;

use auth::HashingParams;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryUserStore;
use chrono::Duration;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Cheap Argon2id costs so tests stay fast
pub fn test_hashing_params() -> HashingParams {
    HashingParams {
        iterations: 1,
        memory_kib: 64,
        parallelism: 1,
        ..HashingParams::default()
    }
}

pub fn token_issuer() -> TokenIssuer {
    TokenIssuer::new(JWT_SECRET, "cloudtv", Duration::hours(1))
}

/// Auth service over a fresh in-memory store
pub fn auth_service() -> (Arc<AuthService<InMemoryUserStore>>, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let hasher = PasswordHasher::new(test_hashing_params()).expect("Failed to build hasher");
    let service = Arc::new(AuthService::new(
        Arc::clone(&store),
        hasher,
        token_issuer(),
    ));
    (service, store)
}

/// Test application that spawns a real HTTP server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryUserStore>,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let (service, store) = auth_service();
        let router = create_router(service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            api_client: reqwest::Client::new(),
            token_issuer: token_issuer(),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
