//! Wire types for the community release feed

use serde::Deserialize;

/// Release stage reported by the community API.
///
/// Only GA entries qualify as a latest release. Stages this tool does not
/// know about deserialize to [`ReleaseStage::Other`] instead of failing,
/// so new upstream channels cannot break resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseStage {
    Ga,
    Beta,
    Alpha,
    #[default]
    #[serde(other)]
    Other,
}

/// One release group (product family) from `GetPublicReleaseGroups`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// One release record from `GetReleaseVersionHistory`.
///
/// All fields are defaulted: the upstream occasionally omits `slug`, and a
/// record missing `version` or `stage` is skipped during selection rather
/// than aborting the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub stage: ReleaseStage,
    #[serde(default)]
    pub slug: Option<String>,
}
