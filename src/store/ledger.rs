//! Newline-delimited ledger of processed versions

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::store::error::LedgerError;

/// Loads every version recorded in the ledger.
///
/// A missing file is an empty ledger. Lines are trimmed, blank lines
/// dropped, and duplicates kept as-is; entry order follows the file.
pub fn load_known_versions(path: &Path) -> Result<Vec<String>, LedgerError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            debug!("Versions file {} does not exist yet", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LedgerError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Appends `version` to the ledger unless it is already recorded.
///
/// Returns whether a write happened. Existing bytes are never touched;
/// a missing trailing newline on the current content is repaired before
/// the new entry goes in.
pub fn append_if_absent(path: &Path, version: &str) -> Result<bool, LedgerError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(LedgerError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.lines().map(str::trim).any(|entry| entry == version) {
        debug!("Versions file already records {}", version);
        return Ok(false);
    }

    let mut entry = String::new();
    if !content.is_empty() && !content.ends_with('\n') {
        entry.push('\n');
    }
    entry.push_str(version);
    entry.push('\n');

    let append = |source| LedgerError::Append {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append)?;
    file.write_all(entry.as_bytes()).map_err(append)?;

    info!("Recorded {} in {}", version, path.display());
    Ok(true)
}
