//! CLI tool to render the bio endpoint to files for offline preview.
//!
//! Produces:
//! - `output/sajbio.json` — the JSON representation
//! - `output/sajbio.html` — the HTML page
//!
//! Metadata and contact links come from the current environment, so
//! `APP_BUILD_SHA=$(git rev-parse HEAD) cargo run --bin render_snapshot`
//! previews a specific build.

use anyhow::Context;
use sajbio::config::{load_build_metadata, load_contact_links};
use sajbio::data::profile;
use sajbio::models::format::RenderFormat;
use sajbio::render::render;

fn main() -> anyhow::Result<()> {
    sajbio::telemetry::init();

    let bio = profile();
    let meta = load_build_metadata();
    let links = load_contact_links();

    std::fs::create_dir_all("output").context("Failed to create output directory")?;

    for (format, path) in [
        (RenderFormat::Json, "output/sajbio.json"),
        (RenderFormat::Html, "output/sajbio.html"),
    ] {
        let rendered = render(format, bio, &meta, &links)
            .with_context(|| format!("Failed to render {format}"))?;
        std::fs::write(path, &rendered.body).with_context(|| format!("Failed to write {path}"))?;
        println!("Wrote {path} ({} bytes, {})", rendered.body.len(), rendered.content_type());
    }

    // Print summary
    println!();
    println!("=== BIO SNAPSHOT ===");
    println!("Name:      {}", bio.name);
    println!("Headline:  {}", bio.headline);
    println!("Expertise: {} entries", bio.core_expertise.len());
    println!("Focus:     {} entries", bio.current_focus.len());
    println!();
    println!("--- Metadata ---");
    println!("  Site:      {}", meta.site_name);
    println!("  Region:    {}", meta.region);
    println!("  Functions: {}", meta.functions_version);
    println!("  Runtime:   {}", meta.python_version);
    println!("  Build:     {}", meta.short_sha());
    println!("  UTC time:  {}", meta.utc_time);

    Ok(())
}
