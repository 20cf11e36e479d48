//! Module for chirp endpoints.
//!
//! Only length validation exists so far; chirps are not stored.

pub mod handlers;
pub mod models;
pub mod routes;
