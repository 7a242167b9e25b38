use askama::Template;

use crate::error::BioError;
use crate::models::meta::{BuildMetadata, ContactLinks};
use crate::models::payload::Endpoints;
use crate::models::profile::Profile;

/// The bio page. Every interpolated value goes through askama's HTML
/// escaper, so profile and environment content cannot inject markup.
#[derive(Template)]
#[template(path = "sajbio.html")]
pub struct BioPage<'a> {
    pub bio: &'a Profile,
    pub meta: &'a BuildMetadata,
    pub links: &'a ContactLinks,
    pub endpoints: Endpoints,
}

pub fn render_html(
    profile: &Profile,
    meta: &BuildMetadata,
    links: &ContactLinks,
) -> Result<String, BioError> {
    let page = BioPage {
        bio: profile,
        meta,
        links,
        endpoints: Endpoints::default(),
    };
    Ok(page.render()?)
}
