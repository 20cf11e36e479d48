//! Module for the admin page and the file server hit counter.

pub mod handlers;
pub mod middleware;
pub mod routes;
