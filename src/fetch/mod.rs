//! Fetch layer for package metadata
//!
//! Lists the packages an account publishes and the versions of each one,
//! then normalizes the upstream JSON into fixed-shape records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Fetcher   │────▶│  Package[]  │
//! │ (raw JSON)  │     │ (degrade,   │     │ (sorted by  │
//! │             │     │  normalize) │     │    name)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for listing packages and versions
//! - [`registries`]: Concrete registry implementations (GitHub Packages)
//! - [`fetcher`]: Sequential aggregation with per-call fallback defaults
//! - [`error`]: Error types for registry operations
//! - [`types`]: Raw upstream descriptors and normalized records

pub mod error;
pub mod fetcher;
pub mod registries;
pub mod registry;
pub mod types;
