//! Chirp validation payloads.

use serde::{Deserialize, Serialize};

/// Longest chirp accepted, in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateChirpResponse {
    pub valid: bool,
}
