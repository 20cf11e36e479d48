//! Record types held by the credential store.
//!
//! Records live only for the lifetime of the process; the store that owns them
//! is `repositories::user_repository`.

pub mod models;
