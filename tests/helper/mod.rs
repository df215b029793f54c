pub mod github;

pub use github::{MockGitHub, embedded_packages, test_config};
