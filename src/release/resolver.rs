//! Two-stage lookup of the newest GA release

use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::release::client::CommunityClient;
use crate::release::error::ResolveError;
use crate::release::types::{Release, ReleaseStage};

/// Resolves the newest GA release of one product line.
///
/// Stage one maps the configured product title to a release group id,
/// stage two scans that group's history for the first GA entry. The
/// scan trusts the order the records arrive in; there is no version
/// comparison.
pub struct ReleaseResolver {
    client: CommunityClient,
    product_title: String,
    result_limit: u32,
}

impl ReleaseResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            client: CommunityClient::new(config),
            product_title: config.product_title.clone(),
            result_limit: config.result_limit,
        }
    }

    pub async fn resolve_latest_ga(&self) -> Result<Release, ResolveError> {
        let group_id = self.locate_group().await?;
        debug!("Release group for '{}' is {}", self.product_title, group_id);

        let release = self.first_ga_release(&group_id).await?;
        info!(
            "Newest GA release of '{}' is {}",
            self.product_title, release.version
        );

        Ok(release)
    }

    /// Finds the id of the first group whose title matches exactly.
    async fn locate_group(&self) -> Result<String, ResolveError> {
        let groups = self.client.release_groups().await?;

        groups
            .into_iter()
            .find(|group| group.title == self.product_title && !group.id.is_empty())
            .map(|group| group.id)
            .ok_or_else(|| ResolveError::GroupNotFound(self.product_title.clone()))
    }

    /// Picks the first GA entry with a non-empty version string.
    async fn first_ga_release(&self, group_id: &str) -> Result<Release, ResolveError> {
        let releases = self
            .client
            .release_history(group_id, self.result_limit)
            .await?;

        if releases.is_empty() {
            return Err(ResolveError::EmptyReleaseList);
        }

        releases
            .into_iter()
            .find(|release| release.stage == ReleaseStage::Ga && !release.version.is_empty())
            .ok_or_else(|| ResolveError::NoGaRelease(self.product_title.clone()))
    }
}
