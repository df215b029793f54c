//! Mock GitHub Packages API for end-to-end tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use tempfile::TempDir;

use pkg_index::config::{AuthToken, IndexConfig};
use pkg_index::fetch::types::Package;

pub const TOKEN: &str = "ghp_integration_secret";

/// A mockito server answering the two GitHub Packages list endpoints
pub struct MockGitHub {
    pub server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockGitHub {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    pub async fn with_packages(mut self, owner: &str, status: usize, body: &str) -> Self {
        let mock = self
            .server
            .mock("GET", format!("/users/{}/packages", owner).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("package_type".into(), "maven".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// `encoded_name` is the package name as it appears in the request path
    pub async fn with_versions(
        mut self,
        owner: &str,
        encoded_name: &str,
        status: usize,
        body: &str,
    ) -> Self {
        let mock = self
            .server
            .mock(
                "GET",
                format!("/users/{}/packages/maven/{}/versions", owner, encoded_name).as_str(),
            )
            .match_query(Matcher::UrlEncoded("per_page".into(), "50".into()))
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    pub async fn assert_all_called(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}

/// Config pointing at the mock server and a fresh output directory
pub fn test_config(server_url: &str, commit_sha: &str) -> (TempDir, IndexConfig) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = IndexConfig::new("acme", "widgets", AuthToken::new(TOKEN));
    config.api_url = server_url.to_string();
    config.commit_sha = commit_sha.to_string();
    config.output_dir = temp_dir.path().join("_site");
    (temp_dir, config)
}

/// Parses the package data embedded in a generated page
pub fn embedded_packages(html: &str) -> Vec<Package> {
    let marker = "const PACKAGES = ";
    let start = html.find(marker).unwrap() + marker.len();
    let end = start + html[start..].find(";\n").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}
