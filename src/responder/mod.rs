//! ProfileResponder — turns a request into the bio response.
//!
//! Shared by both serverless functions in `api/`. The profile is borrowed
//! for the process lifetime; metadata and contact links are loaded fresh
//! for every request.

use serde_json::json;
use tracing::{debug, info, warn};
use vercel_runtime::{Body, Request, Response, StatusCode};

use crate::config::{load_build_metadata, load_contact_links};
use crate::error::BioError;
use crate::models::format::RenderFormat;
use crate::models::meta::{BuildMetadata, ContactLinks};
use crate::models::profile::Profile;
use crate::render::{render, Rendered};

/// Which function received the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/api/sajbio`: format chosen by the `format` query parameter.
    Negotiated,
    /// `/api/sajbio/html`: always HTML.
    HtmlOnly,
}

impl Route {
    /// Resolve the output format for a request on this route.
    pub fn format_for(&self, query: Option<&str>) -> RenderFormat {
        match self {
            Route::Negotiated => RenderFormat::from_query(query),
            Route::HtmlOnly => RenderFormat::Html,
        }
    }
}

/// Serves one profile in either format.
#[derive(Debug, Clone, Copy)]
pub struct ProfileResponder<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileResponder<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        ProfileResponder { profile }
    }

    /// Render the profile with the current environment snapshot.
    pub fn handle(&self, format: RenderFormat) -> Result<Response<Body>, BioError> {
        let meta = load_build_metadata();
        let links = load_contact_links();
        self.handle_with(format, &meta, &links)
    }

    /// Render the profile with explicit metadata and links.
    pub fn handle_with(
        &self,
        format: RenderFormat,
        meta: &BuildMetadata,
        links: &ContactLinks,
    ) -> Result<Response<Body>, BioError> {
        debug!(build_sha = %meta.build_sha, region = %meta.region, "rendering bio");
        let rendered = render(format, self.profile, meta, links)?;
        into_response(rendered)
    }

    /// Entry point for the `api/` functions.
    ///
    /// GET and HEAD are served with status 200 (HEAD without a body); any
    /// other method gets 405.
    pub fn serve(&self, req: &Request, route: Route) -> Result<Response<Body>, BioError> {
        let method = req.method();
        let path = req.uri().path();

        if !is_servable(method) {
            warn!(%method, path, "rejected request method");
            return method_not_allowed();
        }

        let format = route.format_for(req.uri().query());
        info!(%method, path, %format, "serving bio");

        let response = self.handle(format)?;
        if *method == http::Method::HEAD {
            let (parts, _) = response.into_parts();
            return Ok(Response::from_parts(parts, Body::Empty));
        }
        Ok(response)
    }
}

/// GET and HEAD are the only methods the bio routes accept.
pub fn is_servable(method: &http::Method) -> bool {
    *method == http::Method::GET || *method == http::Method::HEAD
}

fn into_response(rendered: Rendered) -> Result<Response<Body>, BioError> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", rendered.content_type())
        .body(Body::Text(rendered.body))?)
}

fn method_not_allowed() -> Result<Response<Body>, BioError> {
    let error = json!({
        "error": "Method not allowed",
        "message": "Use GET to fetch the bio"
    });
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Allow", "GET, HEAD")
        .body(Body::Text(error.to_string()))?)
}
