//! Change detection against the ledger of seen versions

use crate::release::types::Release;

/// Base of the public announcement URL for a release slug
pub const RELEASE_URL_BASE: &str = "https://community.ui.com/releases/";

/// Result of comparing a resolved release against the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resolved version has already been processed
    Unchanged,
    /// The resolved version is not in the ledger yet
    NewVersion {
        version: String,
        slug: String,
        url: String,
    },
}

/// Compares the resolved release against the known versions.
///
/// Membership is exact string equality; the candidate is taken as-is.
/// The announcement URL is derived from the slug and stays empty when
/// the release carries none.
pub fn detect(latest: &Release, known: &[String]) -> Outcome {
    if known.iter().any(|version| version == &latest.version) {
        return Outcome::Unchanged;
    }

    let slug = latest.slug.clone().unwrap_or_default();
    let url = if slug.is_empty() {
        String::new()
    } else {
        format!("{}{}", RELEASE_URL_BASE, slug)
    };

    Outcome::NewVersion {
        version: latest.version.clone(),
        slug,
        url,
    }
}
