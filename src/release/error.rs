use thiserror::Error;

/// Failures while resolving the latest GA release.
///
/// Each failure path has its own variant so callers can branch on the kind
/// instead of matching message strings.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error while contacting community API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Received invalid JSON from community API: {0}")]
    InvalidJson(String),

    #[error("GraphQL error: {0}")]
    Api(String),

    #[error("GraphQL response did not include data payload")]
    MissingData,

    #[error("Could not locate release group for '{0}'")]
    GroupNotFound(String),

    #[error("Community API returned no releases for the group")]
    EmptyReleaseList,

    #[error("No GA releases available for '{0}'")]
    NoGaRelease(String),
}
