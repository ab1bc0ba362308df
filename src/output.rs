//! Emission of check results to a step-output file or stdout

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::checker::Outcome;
use crate::config::STEP_OUTPUT_ENV;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Unable to write step output file '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the result of a check goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Bare version on stdout, silence when nothing changed
    Stdout,
    /// key=value lines appended to a GitHub-style step output file
    File(PathBuf),
}

impl OutputTarget {
    /// Selects the target from the `GITHUB_OUTPUT` environment variable.
    pub fn from_env() -> Self {
        Self::from_output_var(std::env::var(STEP_OUTPUT_ENV).ok())
    }

    /// An unset or empty variable means stdout.
    fn from_output_var(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Emits the outcome of one check.
    ///
    /// The file target always receives all three keys, with empty values
    /// when nothing changed, so downstream workflow steps can read them
    /// unconditionally.
    pub fn emit(&self, outcome: &Outcome) -> Result<(), EmitError> {
        match self {
            Self::Stdout => {
                if let Outcome::NewVersion { version, .. } = outcome {
                    println!("{}", version);
                }
                Ok(())
            }
            Self::File(path) => append_step_outputs(path, outcome),
        }
    }
}

fn step_output_lines(outcome: &Outcome) -> String {
    let (version, slug, url) = match outcome {
        Outcome::Unchanged => ("", "", ""),
        Outcome::NewVersion { version, slug, url } => {
            (version.as_str(), slug.as_str(), url.as_str())
        }
    };

    format!(
        "new_version={}\nrelease_slug={}\nrelease_url={}\n",
        version, slug, url
    )
}

fn append_step_outputs(path: &Path, outcome: &Outcome) -> Result<(), EmitError> {
    debug!("Appending step outputs to {}", path.display());

    let write = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write)?;
    file.write_all(step_output_lines(outcome).as_bytes())
        .map_err(write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn new_version_outcome() -> Outcome {
        Outcome::NewVersion {
            version: "9.3.45".to_string(),
            slug: "unifi-network-application-9-3-45".to_string(),
            url: "https://community.ui.com/releases/unifi-network-application-9-3-45"
                .to_string(),
        }
    }

    #[test]
    fn an_unset_variable_selects_stdout() {
        assert_eq!(OutputTarget::from_output_var(None), OutputTarget::Stdout);
    }

    #[test]
    fn an_empty_variable_selects_stdout() {
        assert_eq!(
            OutputTarget::from_output_var(Some(String::new())),
            OutputTarget::Stdout
        );
    }

    #[test]
    fn a_populated_variable_selects_the_file_target() {
        assert_eq!(
            OutputTarget::from_output_var(Some("/tmp/step-output".to_string())),
            OutputTarget::File(PathBuf::from("/tmp/step-output"))
        );
    }

    #[test]
    fn the_file_target_writes_all_three_keys_for_a_new_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");

        OutputTarget::File(path.clone())
            .emit(&new_version_outcome())
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "new_version=9.3.45\n\
             release_slug=unifi-network-application-9-3-45\n\
             release_url=https://community.ui.com/releases/unifi-network-application-9-3-45\n"
        );
    }

    #[test]
    fn the_file_target_writes_empty_values_when_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");

        OutputTarget::File(path.clone())
            .emit(&Outcome::Unchanged)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "new_version=\nrelease_slug=\nrelease_url=\n"
        );
    }

    #[test]
    fn the_file_target_appends_to_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        fs::write(&path, "earlier_step=done\n").unwrap();

        OutputTarget::File(path.clone())
            .emit(&Outcome::Unchanged)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "earlier_step=done\nnew_version=\nrelease_slug=\nrelease_url=\n"
        );
    }

    #[test]
    fn an_unwritable_target_reports_a_write_error() {
        let dir = TempDir::new().unwrap();
        // A directory at the output path cannot be opened for append
        let path = dir.path().join("output");
        fs::create_dir(&path).unwrap();

        let result = OutputTarget::File(path).emit(&Outcome::Unchanged);

        assert!(matches!(result, Err(EmitError::Write { .. })));
    }

    #[test]
    fn the_stdout_target_emits_without_error() {
        OutputTarget::Stdout.emit(&new_version_outcome()).unwrap();
        OutputTarget::Stdout.emit(&Outcome::Unchanged).unwrap();
    }
}
