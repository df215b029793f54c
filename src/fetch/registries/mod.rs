//! Registry implementations for listing packages and versions

pub mod github;

pub use github::GitHubPackagesRegistry;
