//! Handler functions for chirp endpoints.

use super::models::{MAX_CHIRP_LENGTH, ValidateChirpRequest, ValidateChirpResponse};
use crate::api::common::{json_payload, service_error_to_http};
use crate::errors::{ServiceError, ServiceResult};
use axum::{
    extract::{Json, rejection::JsonRejection},
    response::{Json as ResponseJson, Response},
};

/// Checks that a chirp body fits the length limit.
pub fn validate_chirp_body(body: &str) -> ServiceResult<()> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ServiceError::validation("Chirp is too long"));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn validate_chirp(
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<ResponseJson<ValidateChirpResponse>, Response> {
    let payload = json_payload(payload).map_err(service_error_to_http)?;

    validate_chirp_body(&payload.body).map_err(service_error_to_http)?;
    Ok(ResponseJson(ValidateChirpResponse { valid: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chirp_length_limit() {
        assert!(validate_chirp_body("").is_ok());
        assert!(validate_chirp_body(&"a".repeat(140)).is_ok());
        assert!(matches!(
            validate_chirp_body(&"a".repeat(141)),
            Err(ServiceError::Validation { .. })
        ));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        assert!(validate_chirp_body(&"é".repeat(140)).is_ok());
    }
}
