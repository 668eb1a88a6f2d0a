use crate::domain::auth::errors::Field;
use crate::domain::auth::errors::FieldViolation;
use crate::domain::auth::errors::ValidationError;
use crate::domain::auth::models::SignupParams;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 32;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Check signup input against every field rule.
///
/// All fields are checked so the caller learns about every problem at once.
/// An empty field only reports that it is required.
///
/// # Errors
/// * `ValidationError` - At least one rule was broken
pub fn validate_signup(params: &SignupParams) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    violations.extend(check_username(&params.username));
    violations.extend(check_email(&params.email));
    violations.extend(check_password(&params.password));
    violations.extend(check_confirm_password(
        &params.password,
        &params.confirm_password,
    ));

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

fn check_username(username: &str) -> Vec<FieldViolation> {
    if username.is_empty() {
        return vec![required(Field::Username)];
    }

    let mut violations = check_length(
        Field::Username,
        username,
        USERNAME_MIN_LENGTH,
        USERNAME_MAX_LENGTH,
    );
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        violations.push(FieldViolation::new(
            Field::Username,
            "username must contain only letters and numbers",
        ));
    }
    violations
}

fn check_email(email: &str) -> Vec<FieldViolation> {
    if email.is_empty() {
        return vec![required(Field::Email)];
    }

    if email_address::EmailAddress::is_valid(email) {
        Vec::new()
    } else {
        vec![FieldViolation::new(
            Field::Email,
            "email must be a valid email",
        )]
    }
}

fn check_password(password: &str) -> Vec<FieldViolation> {
    if password.is_empty() {
        return vec![required(Field::Password)];
    }

    check_length(
        Field::Password,
        password,
        PASSWORD_MIN_LENGTH,
        PASSWORD_MAX_LENGTH,
    )
}

fn check_confirm_password(password: &str, confirm_password: &str) -> Vec<FieldViolation> {
    if confirm_password.is_empty() {
        return vec![required(Field::ConfirmPassword)];
    }

    if confirm_password == password {
        Vec::new()
    } else {
        vec![FieldViolation::new(
            Field::ConfirmPassword,
            "confirm_password must match password",
        )]
    }
}

// Lengths count characters, not bytes
fn check_length(field: Field, value: &str, min: usize, max: usize) -> Vec<FieldViolation> {
    let length = value.chars().count();
    if length < min {
        vec![FieldViolation::new(
            field,
            format!("{} must be at least {} characters", field, min),
        )]
    } else if length > max {
        vec![FieldViolation::new(
            field,
            format!("{} must be at most {} characters", field, max),
        )]
    } else {
        Vec::new()
    }
}

fn required(field: Field) -> FieldViolation {
    FieldViolation::new(field, format!("{} is required", field))
}
