//! Data access layer.
//!
//! Repositories own stored records and expose them by value.

pub mod user_repository;
