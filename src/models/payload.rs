use serde::Serialize;

use super::meta::BuildMetadata;
use super::profile::Profile;

/// Path of the JSON representation.
pub const JSON_PATH: &str = "/api/sajbio";
/// Path advertised for the HTML representation.
pub const HTML_PATH: &str = "/api/sajbio?format=html";

/// Discovery links included in every JSON response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Endpoints {
    pub json: &'static str,
    pub html: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            json: JSON_PATH,
            html: HTML_PATH,
        }
    }
}

/// Top-level JSON document: `{ bio, meta, endpoints }`.
#[derive(Debug, Clone, Serialize)]
pub struct BioPayload<'a> {
    pub bio: &'a Profile,
    pub meta: &'a BuildMetadata,
    pub endpoints: Endpoints,
}
