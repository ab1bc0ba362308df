//! GraphQL transport for the UI community API

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::release::error::ResolveError;
use crate::release::types::{Release, ReleaseGroup};

/// Query returning every public release group with its id and title
const GROUPS_QUERY: &str = r#"
query GetPublicReleaseGroups {
  publicReleaseGroups {
    id
    title
  }
}
"#;

/// Query returning the most recent releases of one group
const RELEASES_QUERY: &str = r#"
query GetReleaseVersionHistory($limit: Int!, $groupId: ID!, $betas: [String!], $alphas: [String!]) {
  releases(limit: $limit, groupId: $groupId, betas: $betas, alphas: $alphas) {
    items {
      version
      stage
      slug
    }
  }
}
"#;

/// Request body of one GraphQL call
#[derive(Serialize)]
struct GraphqlRequest<'a> {
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    query: &'a str,
    variables: Value,
}

/// Top-level response envelope shared by both queries
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlError>>,
}

/// One entry of the response `errors` array
#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: Option<String>,
}

/// Payload of `GetPublicReleaseGroups`
#[derive(Debug, Deserialize)]
struct ReleaseGroupsData {
    #[serde(rename = "publicReleaseGroups", default)]
    public_release_groups: Vec<ReleaseGroup>,
}

/// Payload of `GetReleaseVersionHistory`
#[derive(Debug, Deserialize)]
struct ReleaseHistoryData {
    #[serde(default)]
    releases: ReleaseList,
}

#[derive(Debug, Default, Deserialize)]
struct ReleaseList {
    #[serde(default)]
    items: Vec<Release>,
}

/// Client for the community GraphQL endpoint.
///
/// The endpoint comes from [`ResolverConfig`], so tests point an instance
/// at a mock server instead of the production site.
pub struct CommunityClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CommunityClient {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(config.user_agent.as_str())
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Fetches all public release groups, in upstream order.
    pub async fn release_groups(&self) -> Result<Vec<ReleaseGroup>, ResolveError> {
        let data: ReleaseGroupsData = self
            .execute("GetPublicReleaseGroups", GROUPS_QUERY, json!({}))
            .await?;

        Ok(data.public_release_groups)
    }

    /// Fetches up to `limit` releases of one group, in upstream order.
    ///
    /// The `betas` and `alphas` variables are sent as explicit nulls:
    /// leaving the keys out makes the API include every stage.
    pub async fn release_history(
        &self,
        group_id: &str,
        limit: u32,
    ) -> Result<Vec<Release>, ResolveError> {
        let variables = json!({
            "limit": limit,
            "groupId": group_id,
            "betas": null,
            "alphas": null,
        });

        let data: ReleaseHistoryData = self
            .execute("GetReleaseVersionHistory", RELEASES_QUERY, variables)
            .await?;

        Ok(data.releases.items)
    }

    /// Executes one GraphQL operation and unwraps the response envelope.
    ///
    /// Validation order follows the API contract: HTTP status, JSON body,
    /// `errors` array (fatal even alongside a populated `data`), then the
    /// `data` payload itself.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: Value,
    ) -> Result<T, ResolveError> {
        debug!("Executing {} against {}", operation_name, self.endpoint);

        let request = GraphqlRequest {
            operation_name,
            query,
            variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GraphqlResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse community API response: {}", e);
            ResolveError::InvalidJson(e.to_string())
        })?;

        let errors = body.errors.unwrap_or_default();
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|error| error.message.as_deref().unwrap_or("Unknown error"))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ResolveError::Api(messages));
        }

        let data = body
            .data
            .filter(|data| !data.is_null())
            .ok_or(ResolveError::MissingData)?;

        serde_json::from_value(data).map_err(|e| {
            warn!("Community API data payload had an unexpected shape: {}", e);
            ResolveError::InvalidJson(e.to_string())
        })
    }
}
