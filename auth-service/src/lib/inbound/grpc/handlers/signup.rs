use std::sync::Arc;

use chrono::Utc;
use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::SignupRequest;
use crate::proto::SignupResponse;

pub async fn signup<S: AuthServicePort>(
    service: Arc<S>,
    request: SignupRequest,
) -> Result<SignupResponse, Status> {
    let result = service.signup(request.into()).await?;

    Ok(SignupResponse {
        user_id: result.user_id.to_string(),
        expires_in: result.expires_in(Utc::now()),
        access_token: result.token,
    })
}

#[cfg(test)]
mod tests {
    use auth::HashingParams;
    use auth::PasswordHasher;
    use auth::TokenIssuer;
    use chrono::Duration;
    use tonic::Code;

    use super::*;
    use crate::domain::auth::service::AuthService;
    use crate::outbound::repositories::InMemoryUserStore;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn service() -> Arc<AuthService<InMemoryUserStore>> {
        let hasher = PasswordHasher::new(HashingParams {
            iterations: 1,
            memory_kib: 64,
            parallelism: 1,
            ..HashingParams::default()
        })
        .expect("Failed to build hasher");
        let issuer = TokenIssuer::new(SECRET, "cloudtv", Duration::hours(1));

        Arc::new(AuthService::new(
            Arc::new(InMemoryUserStore::new()),
            hasher,
            issuer,
        ))
    }

    fn request(username: &str, email: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_response() {
        let service = service();

        let response = signup(
            service,
            request("alice01", "alice@example.com", "Str0ngPass!", "Str0ngPass!"),
        )
        .await
        .expect("Signup failed");

        assert!(!response.access_token.is_empty());
        assert!(!response.user_id.is_empty());
        assert!((3598..=3600).contains(&response.expires_in));

        let claims = TokenIssuer::new(SECRET, "cloudtv", Duration::hours(1))
            .decode(&response.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, response.user_id);
    }

    #[tokio::test]
    async fn test_signup_duplicate_is_already_exists() {
        let service = service();
        let req = request("alice01", "alice@example.com", "Str0ngPass!", "Str0ngPass!");

        signup(Arc::clone(&service), req.clone())
            .await
            .expect("First signup failed");
        let status = signup(service, req).await.unwrap_err();

        assert_eq!(status.code(), Code::AlreadyExists);
    }

    #[tokio::test]
    async fn test_signup_invalid_input_is_invalid_argument() {
        let status = signup(service(), request("a", "bad-email", "short", "mismatch"))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        for field in ["username", "email", "password", "confirm_password"] {
            assert!(status.message().contains(field), "missing {}", field);
        }
    }
}
