//! Error type for the bio endpoint.
//!
//! No request input can fail; these are faults of the host environment
//! (template, serializer, or response builder) and surface as 500s from the
//! runtime.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Response construction failed: {0}")]
    Response(#[from] http::Error),
}
