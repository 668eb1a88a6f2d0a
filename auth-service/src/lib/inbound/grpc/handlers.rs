use tonic::Status;

use crate::domain::auth::errors::SignupError;
use crate::domain::auth::models::SignupParams;

pub mod signup;

impl From<crate::proto::SignupRequest> for SignupParams {
    fn from(request: crate::proto::SignupRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

impl From<SignupError> for Status {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::Validation(_) => Status::invalid_argument(err.to_string()),
            SignupError::Conflict => Status::already_exists(err.to_string()),
            // Details stay in the service logs
            SignupError::Internal(_) => Status::internal("internal error"),
        }
    }
}
