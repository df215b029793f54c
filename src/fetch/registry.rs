//! Registry trait for listing an account's packages and their versions

#[cfg(test)]
use mockall::automock;

use crate::fetch::error::RegistryError;
use crate::fetch::types::{RawPackage, RawVersion};

/// Trait for listing packages from a package-hosting API
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Returns the package type this registry lists (e.g. "maven")
    fn package_type(&self) -> &'static str;

    /// Lists the packages published by an account (first page only)
    ///
    /// # Returns
    /// * `Ok(Vec<RawPackage>)` - Packages in API order
    /// * `Err(RegistryError)` - If the request fails or the body is not a list
    async fn list_packages(&self, owner: &str) -> Result<Vec<RawPackage>, RegistryError>;

    /// Lists the versions of one package (first page only)
    ///
    /// # Arguments
    /// * `owner` - The account that owns the package
    /// * `package_name` - Unencoded package name, may contain `/`
    async fn list_versions(
        &self,
        owner: &str,
        package_name: &str,
    ) -> Result<Vec<RawVersion>, RegistryError>;
}
