//! Version pin rewriting for the build configuration file

use std::fs;
use std::path::Path;

use tracing::info;

use crate::store::error::PinError;

/// Rewrites the first line starting with `marker` to `marker + version`.
///
/// Every other line passes through unchanged and the file is written
/// back with a single trailing newline. When no line carries the marker
/// the file is left untouched and an error is returned.
pub fn update_version_pin(path: &Path, marker: &str, version: &str) -> Result<(), PinError> {
    let original = fs::read_to_string(path).map_err(|source| PinError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let replacement = format!("{}{}", marker, version);
    let mut replaced = false;
    let mut lines = Vec::new();
    for line in original.lines() {
        if !replaced && line.starts_with(marker) {
            lines.push(replacement.as_str());
            replaced = true;
        } else {
            lines.push(line);
        }
    }

    if !replaced {
        return Err(PinError::MarkerNotFound {
            marker: marker.to_string(),
            path: path.to_path_buf(),
        });
    }

    let updated = format!("{}\n", lines.join("\n"));
    fs::write(path, updated).map_err(|source| PinError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Pinned {} in {}", version, path.display());
    Ok(())
}
