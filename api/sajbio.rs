use sajbio::data::profile;
use sajbio::responder::{ProfileResponder, Route};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    sajbio::telemetry::init();
    tracing::info!(version = sajbio::version(), "sajbio function starting");
    run(handler).await
}

/// GET /api/sajbio — Bio as JSON, or HTML with `?format=html`.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    Ok(ProfileResponder::new(profile()).serve(&req, Route::Negotiated)?)
}
