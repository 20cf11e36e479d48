//! Global application error types.
//!
//! Every service, repository and utility in the backend reports failures through
//! [`ServiceError`]. The HTTP layer converts it into exactly one status code in
//! `api::common::service_error_to_http`.

use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    /// Correct email, wrong password.
    #[error("Invalid credentials for {email}")]
    InvalidCredentials { email: String },

    /// Login attempted for an email with no record.
    #[error("No user found with the email: {email}")]
    UnknownIdentity { email: String },

    #[error("Malformed authorization header: {message}")]
    MalformedHeader { message: String },

    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn invalid_credentials(email: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            email: email.into(),
        }
    }

    pub fn unknown_identity(email: impl Into<String>) -> Self {
        Self::UnknownIdentity {
            email: email.into(),
        }
    }

    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut error_messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        error_messages.sort();

        ServiceError::validation(error_messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Password is required"))]
        password: String,
    }

    #[test]
    fn test_validation_errors_are_flattened() {
        let errors = Payload {
            password: String::new(),
        }
        .validate()
        .unwrap_err();

        match ServiceError::from(errors) {
            ServiceError::Validation { message } => {
                assert_eq!(message, "password: Password is required")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
