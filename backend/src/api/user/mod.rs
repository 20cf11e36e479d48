//! Module for user registration and profile endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
