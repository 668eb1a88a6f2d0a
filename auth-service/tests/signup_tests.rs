mod common;

use std::sync::Arc;

use auth_service::domain::auth::errors::Field;
use auth_service::domain::auth::errors::SignupError;
use auth_service::domain::auth::models::SignupParams;
use auth_service::domain::auth::ports::AuthServicePort;
use chrono::Utc;

fn alice() -> SignupParams {
    SignupParams::new("alice01", "alice@example.com", "Str0ngPass!", "Str0ngPass!")
}

#[tokio::test]
async fn test_signup_then_duplicate_conflicts() {
    let (service, store) = common::auth_service();

    let result = service.signup(alice()).await.expect("Signup failed");

    assert!(!result.token.is_empty());
    assert!(!result.user_id.to_string().is_empty());
    let expires_in = result.expires_in(Utc::now());
    assert!((3598..=3600).contains(&expires_in));

    let claims = common::token_issuer()
        .decode(&result.token)
        .expect("Token validation failed");
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.sub, result.user_id.to_string());

    let second = service.signup(alice()).await;
    assert!(matches!(second, Err(SignupError::Conflict)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_signup_with_taken_email_conflicts() {
    let (service, _store) = common::auth_service();
    service.signup(alice()).await.expect("Signup failed");

    let result = service
        .signup(SignupParams::new(
            "alice02",
            "alice@example.com",
            "Str0ngPass!",
            "Str0ngPass!",
        ))
        .await;

    assert!(matches!(result, Err(SignupError::Conflict)));
}

#[tokio::test]
async fn test_invalid_signup_reports_all_fields() {
    let (service, store) = common::auth_service();

    let result = service
        .signup(SignupParams::new("a", "bad-email", "short", "mismatch"))
        .await;

    match result {
        Err(SignupError::Validation(err)) => assert_eq!(
            err.fields(),
            vec![
                Field::Username,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword
            ]
        ),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_same_password_distinct_stored_hashes() {
    let (service, store) = common::auth_service();

    service.signup(alice()).await.expect("Signup failed");
    service
        .signup(SignupParams::new(
            "bob02",
            "bob@example.com",
            "Str0ngPass!",
            "Str0ngPass!",
        ))
        .await
        .expect("Signup failed");

    let users = store.users();
    assert_eq!(users.len(), 2);
    assert_ne!(users[0].password_salt, users[1].password_salt);
    assert_ne!(users[0].password_hash, users[1].password_hash);
    assert!(users.iter().all(|u| u.password_hash != "Str0ngPass!"));
}

#[tokio::test]
async fn test_concurrent_signups_for_same_username() {
    let (service, store) = common::auth_service();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .signup(SignupParams::new(
                        "alice01",
                        format!("alice{}@example.com", i),
                        "Str0ngPass!",
                        "Str0ngPass!",
                    ))
                    .await
            })
        })
        .collect();

    let mut succeeded = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("Task panicked") {
            Ok(_) => succeeded += 1,
            Err(SignupError::Conflict) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.len(), 1);
}
