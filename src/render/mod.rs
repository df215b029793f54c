//! Static page rendering
//!
//! # Modules
//!
//! - [`page`]: Assembles the HTML document from package records
//! - [`usage`]: Copyable Maven snippets for the usage section
//! - [`escape`]: Escaping for HTML text and inline script data
//! - [`site`]: Writes the document to the output directory
//! - [`error`]: Error types for rendering and writing

pub mod error;
pub mod escape;
pub mod page;
pub mod site;
pub mod usage;
