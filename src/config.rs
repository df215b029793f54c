use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Upstream API constants
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Base URL for GitHub web links (repository, commits, actions)
pub const GITHUB_WEB_URL: &str = "https://github.com";

/// Base URL of the Maven registry served by GitHub Packages
pub const MAVEN_REGISTRY_URL: &str = "https://maven.pkg.github.com";

/// Value of the `X-GitHub-Api-Version` header
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// The only package type listed
pub const PACKAGE_TYPE: &str = "maven";

/// Page size for the package listing (no further pages are requested)
pub const PACKAGES_PER_PAGE: u32 = 100;

/// Page size for the version listing of one package
pub const VERSIONS_PER_PAGE: u32 = 50;

/// A version whose name contains this marker is a pre-release
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

// =============================================================================
// Output constants
// =============================================================================

/// Directory the page is written to unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "_site";

/// File name of the generated page inside the output directory
pub const OUTPUT_FILE: &str = "index.html";

/// Bearer token for the GitHub API.
///
/// Formatting never reveals the secret, so it is safe to hold inside
/// structs that get logged with `{:?}`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw secret, for building the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Settings for one run of the index generator
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Account whose packages are listed
    pub owner: String,
    /// Repository the packages are published from
    pub repo: String,
    pub token: AuthToken,
    /// Commit the page is built from, empty when unknown
    pub commit_sha: String,
    pub api_url: String,
    pub output_dir: PathBuf,
}

impl IndexConfig {
    pub fn new(owner: &str, repo: &str, token: AuthToken) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            commit_sha: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Returns the path of the generated page.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_token_debug_and_display_hide_the_secret() {
        let token = AuthToken::new("ghp_secret");

        assert_eq!(format!("{:?}", token), "AuthToken(***)");
        assert_eq!(token.to_string(), "***");
        assert_eq!(token.expose(), "ghp_secret");
    }

    #[test]
    fn index_config_debug_does_not_leak_token() {
        let config = IndexConfig::new("acme", "widgets", AuthToken::new("ghp_secret"));

        let debug = format!("{:?}", config);

        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("acme"));
    }

    #[test]
    fn index_config_new_uses_defaults() {
        let config = IndexConfig::new("acme", "widgets", AuthToken::new("t"));

        assert_eq!(config.commit_sha, "");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.output_path(), PathBuf::from("_site/index.html"));
    }
}
