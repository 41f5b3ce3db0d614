//! Reactive client state shared between pages and the submission flow.

pub mod auth;
pub mod form;
