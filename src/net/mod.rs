//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps responses to `ApiError`, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
