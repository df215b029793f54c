use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::{MakeWriterExt, OrElse, WithMaxLevel};

use pkg_index::config::{AuthToken, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR, IndexConfig};
use pkg_index::fetch::registries::GitHubPackagesRegistry;

#[derive(Parser)]
#[command(name = "pkg-index")]
#[command(
    version,
    about = "Generate a static index page of an account's Maven packages on GitHub Packages"
)]
struct Cli {
    /// Account that owns the packages
    owner: String,

    /// Repository the packages are published from
    repo: String,

    /// GitHub token with read:packages scope
    token: String,

    /// Commit the page is built from
    commit_sha: Option<String>,

    /// Directory the page is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "PKG_INDEX_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Cli {
    fn into_config(self) -> IndexConfig {
        IndexConfig {
            owner: self.owner,
            repo: self.repo,
            token: AuthToken::new(self.token),
            commit_sha: self.commit_sha.unwrap_or_default(),
            api_url: self.api_url,
            output_dir: self.output_dir,
        }
    }
}

/// Warnings and errors go to `errors`, progress and debug lines to `progress`.
fn diagnostics_writer<E, P>(errors: E, progress: P) -> OrElse<WithMaxLevel<E>, P>
where
    E: for<'a> MakeWriter<'a>,
    P: for<'a> MakeWriter<'a>,
{
    errors.with_max_level(Level::WARN).or_else(progress)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(diagnostics_writer(std::io::stderr, std::io::stdout))
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_tracing();

    let registry = Arc::new(GitHubPackagesRegistry::new(
        &config.api_url,
        config.token.clone(),
    ));

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(pkg_index::pipeline::run(
            &config,
            registry,
            chrono::Utc::now(),
        ))?;

    Ok(())
}
