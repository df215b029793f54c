//! GitHub Packages API registry implementation

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{
    AuthToken, GITHUB_API_VERSION, PACKAGE_TYPE, PACKAGES_PER_PAGE, VERSIONS_PER_PAGE,
};
use crate::fetch::error::RegistryError;
use crate::fetch::registry::PackageRegistry;
use crate::fetch::types::{ApiListResponse, RawPackage, RawVersion};

/// Registry implementation for the GitHub Packages REST API
pub struct GitHubPackagesRegistry {
    client: reqwest::Client,
    base_url: String,
    token: AuthToken,
}

impl GitHubPackagesRegistry {
    /// Creates a new GitHubPackagesRegistry with a custom base URL
    pub fn new(base_url: &str, token: AuthToken) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("pkg-index")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn packages_url(&self, owner: &str) -> String {
        format!(
            "{}/users/{}/packages?package_type={}&per_page={}",
            self.base_url, owner, PACKAGE_TYPE, PACKAGES_PER_PAGE
        )
    }

    fn versions_url(&self, owner: &str, package_name: &str) -> String {
        format!(
            "{}/users/{}/packages/{}/{}/versions?per_page={}",
            self.base_url,
            owner,
            PACKAGE_TYPE,
            urlencoding::encode(package_name),
            VERSIONS_PER_PAGE
        )
    }

    /// GETs a list endpoint and returns its elements.
    ///
    /// Any non-2xx status or a body that is not a JSON array is an error
    /// carrying the URL and the raw body. Inside an array each element is
    /// decoded on its own; an element that is not an object is skipped.
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, RegistryError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(self.token.expose())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RegistryError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let items = match serde_json::from_str::<ApiListResponse>(&body) {
            Ok(ApiListResponse::List(items)) => items,
            Ok(ApiListResponse::Other(_)) | Err(_) => {
                return Err(RegistryError::UnexpectedResponse {
                    url: url.to_string(),
                    body,
                });
            }
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<T>(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Skipping malformed entry from {}: {}", url, e);
                    None
                }
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl PackageRegistry for GitHubPackagesRegistry {
    fn package_type(&self) -> &'static str {
        PACKAGE_TYPE
    }

    async fn list_packages(&self, owner: &str) -> Result<Vec<RawPackage>, RegistryError> {
        self.get_list(&self.packages_url(owner)).await
    }

    async fn list_versions(
        &self,
        owner: &str,
        package_name: &str,
    ) -> Result<Vec<RawVersion>, RegistryError> {
        self.get_list(&self.versions_url(owner, package_name)).await
    }
}
