//! Domain models for the bio endpoint.
//!
//! These types are shared across all modules: data, config, render, and the
//! `api/` handlers.

pub mod format;
pub mod meta;
pub mod payload;
pub mod profile;
