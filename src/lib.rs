//! sajbio — Shared Library
//!
//! This crate contains the profile data, environment configuration, and
//! JSON/HTML renderers used by the serverless functions in `api/`.
//!
//! Each function imports from this library to keep handlers thin:
//! they pick a [`responder::Route`] and hand the request to
//! [`responder::ProfileResponder`].

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod render;
pub mod responder;
pub mod telemetry;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
