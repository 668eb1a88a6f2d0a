use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::SignupParams;
use crate::domain::auth::models::SignupResult;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .signup(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref result| ApiSuccess::new(StatusCode::CREATED, result.into()))
}

/// HTTP request body for signing up (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

impl From<SignupRequestBody> for SignupParams {
    fn from(body: SignupRequestBody) -> Self {
        Self {
            username: body.username,
            email: body.email,
            password: body.password,
            confirm_password: body.confirm_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub user_id: String,
    pub access_token: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
}

impl From<&SignupResult> for SignupResponseData {
    fn from(result: &SignupResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            access_token: result.token.clone(),
            expires_in: result.expires_in(Utc::now()),
        }
    }
}
