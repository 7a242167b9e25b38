use crate::error::BioError;
use crate::models::meta::BuildMetadata;
use crate::models::payload::{BioPayload, Endpoints};
use crate::models::profile::Profile;

/// Serialize `{ bio, meta, endpoints }` with two-space indentation.
pub fn render_json(profile: &Profile, meta: &BuildMetadata) -> Result<String, BioError> {
    let payload = BioPayload {
        bio: profile,
        meta,
        endpoints: Endpoints::default(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}
