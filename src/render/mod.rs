//! Renderers for the two output formats.
//!
//! Both take the same inputs (profile, metadata, links) and return the
//! complete response body as a string.

pub mod html;
pub mod json;

use crate::error::BioError;
use crate::models::format::RenderFormat;
use crate::models::meta::{BuildMetadata, ContactLinks};
use crate::models::profile::Profile;

/// A fully rendered response body and the format it was rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub format: RenderFormat,
    pub body: String,
}

impl Rendered {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Render `profile` in the requested format.
pub fn render(
    format: RenderFormat,
    profile: &Profile,
    meta: &BuildMetadata,
    links: &ContactLinks,
) -> Result<Rendered, BioError> {
    let body = match format {
        RenderFormat::Json => json::render_json(profile, meta)?,
        RenderFormat::Html => html::render_html(profile, meta, links)?,
    };
    Ok(Rendered { format, body })
}
