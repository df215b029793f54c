//! Fetch, render and write the index page in one pass

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::IndexConfig;
use crate::fetch::fetcher::Fetcher;
use crate::fetch::registry::PackageRegistry;
use crate::fetch::types::total_versions;
use crate::render::error::RenderError;
use crate::render::page::{PageContext, render_page};
use crate::render::site::write_site;

/// Summary of a generated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub path: PathBuf,
    pub bytes: usize,
    pub package_count: usize,
    pub version_count: usize,
}

/// Generates the index page for `config.owner` using `registry`.
///
/// Upstream failures never fail the run; they only shrink the page.
/// Errors come from writing the output file.
pub async fn run(
    config: &IndexConfig,
    registry: Arc<dyn PackageRegistry>,
    build_time: DateTime<Utc>,
) -> Result<GeneratedSite, RenderError> {
    info!("Fetching packages for {}/{}...", config.owner, config.repo);
    let packages = Fetcher::new(registry).fetch_packages(&config.owner).await;
    info!("Found {} packages", packages.len());

    let ctx = PageContext::new(&config.owner, &config.repo, &config.commit_sha, build_time);
    let html = render_page(&packages, &ctx)?;
    let path = write_site(&config.output_dir, &html)?;
    info!("Generated {} ({} bytes)", path.display(), html.len());

    Ok(GeneratedSite {
        path,
        bytes: html.len(),
        package_count: packages.len(),
        version_count: total_versions(&packages),
    })
}
