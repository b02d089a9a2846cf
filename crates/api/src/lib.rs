//! HTTP resource clients for the Harbor chat backend.
//!
//! Each module is a stateless namespace of free functions; every call takes
//! the shared `reqwest::Client`, the configured base URL, and the [`Session`]
//! explicitly. One user intent maps to exactly one outbound request, and a
//! non-success response propagates to the caller unmodified.

pub mod auth;
pub mod channels;
pub mod error;
pub mod messages;
mod session;

pub use {
    error::{Error, Result},
    session::Session,
};
