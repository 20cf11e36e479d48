//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains, such as
//! user registration, chirps and the admin page, excluding core authentication
//! routes which are handled separately.

pub mod admin;
pub mod chirp;
pub mod common;
pub mod user;
