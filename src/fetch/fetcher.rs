//! Sequential aggregation of packages and their versions
//!
//! Every upstream failure is absorbed at the call that hit it: the failure
//! is logged and the call yields an empty list, so one broken lookup never
//! aborts the rest of the run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::fetch::registry::PackageRegistry;
use crate::fetch::types::{Package, RawPackage, RawVersion};

pub struct Fetcher {
    registry: Arc<dyn PackageRegistry>,
}

impl Fetcher {
    pub fn new(registry: Arc<dyn PackageRegistry>) -> Self {
        Self { registry }
    }

    /// Lists the account's packages, or nothing if the call fails.
    pub async fn list_packages(&self, owner: &str) -> Vec<RawPackage> {
        match self.registry.list_packages(owner).await {
            Ok(packages) => packages,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Lists the versions of one package, or nothing if the call fails.
    pub async fn list_versions(&self, owner: &str, package_name: &str) -> Vec<RawVersion> {
        match self.registry.list_versions(owner, package_name).await {
            Ok(versions) => versions,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Fetches every package with its versions, sorted by name.
    ///
    /// Version lookups run one at a time in listing order.
    pub async fn fetch_packages(&self, owner: &str) -> Vec<Package> {
        let default_type = self.registry.package_type();
        let mut packages = Vec::new();

        for raw in self.list_packages(owner).await {
            let name = raw.name.clone().unwrap_or_default();
            info!("Fetching versions for: {}", name);

            let versions = self.list_versions(owner, &name).await;
            packages.push(Package::from_raw(raw, versions, default_type));
        }

        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages
    }
}
