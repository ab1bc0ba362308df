use std::time::Duration;

// =============================================================================
// Community API constants
// =============================================================================

/// Production GraphQL endpoint of the UI community site
pub const COMMUNITY_GRAPHQL_ENDPOINT: &str = "https://community.svc.ui.com/graphql";

/// Release-group title of the product this tool watches
pub const NETWORK_APP_TITLE: &str = "UniFi Network Application";

/// Upper bound on release records requested per run
pub const RESULT_LIMIT: u32 = 50;

/// Timeout applied to each outbound request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Client identifier sent as the User-Agent header
pub const USER_AGENT: &str = concat!(
    "unifi-release-watch/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/skanehira/unifi-release-watch)"
);

// =============================================================================
// Result emission
// =============================================================================

/// Environment variable naming the step-output file, if any
pub const STEP_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

// =============================================================================
// Build assets
// =============================================================================

/// Marker prefix of the Dockerfile version pin
pub const DOCKERFILE_VERSION_MARKER: &str = "ARG UNIFI_CONTROLLER_VERSION=";

/// Default path of the ledger of already-processed versions
pub const DEFAULT_LEDGER_PATH: &str = "versions.txt";

/// Default path of the build configuration carrying the version pin
pub const DEFAULT_DOCKERFILE_PATH: &str = "Dockerfile";

/// Immutable settings for one resolver instance.
///
/// `Default` carries the production values; tests swap `endpoint` for a
/// mock server URL.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// GraphQL endpoint receiving both queries
    pub endpoint: String,
    /// Release-group title identifying the product
    pub product_title: String,
    /// Maximum number of release records fetched
    pub result_limit: u32,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: COMMUNITY_GRAPHQL_ENDPOINT.to_string(),
            product_title: NETWORK_APP_TITLE.to_string(),
            result_limit: RESULT_LIMIT,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
