//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its input signals and form status, and hands every submit
//! to `flow::AuthFlow`. `dashboard` is the landing route after auth and the
//! home of logout.

pub mod dashboard;
pub mod login;
pub mod signup;
