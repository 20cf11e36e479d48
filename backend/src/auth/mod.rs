//! Authentication module for sessions and access control.
//!
//! This module provides login, access and refresh token handling, and the
//! middleware that verifies bearer credentials on protected routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
