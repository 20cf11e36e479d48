//! Business logic services.
//!
//! Services sit between the HTTP handlers and the credential store.

pub mod user_service;
