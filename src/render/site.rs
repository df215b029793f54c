//! Writing the generated page to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_FILE;
use crate::render::error::RenderError;

/// Writes `html` to `<output_dir>/index.html`, creating the directory if needed.
///
/// An existing page is overwritten. Returns the path written.
pub fn write_site(output_dir: &Path, html: &str) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(output_dir).map_err(|source| RenderError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(OUTPUT_FILE);
    fs::write(&path, html).map_err(|source| RenderError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
