use sajbio::data::profile;
use sajbio::responder::{ProfileResponder, Route};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    sajbio::telemetry::init();
    tracing::info!(version = sajbio::version(), "sajbio html function starting");
    run(handler).await
}

/// GET /api/sajbio/html — Bio as an HTML page, regardless of query string.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    Ok(ProfileResponder::new(profile()).serve(&req, Route::HtmlOnly)?)
}
