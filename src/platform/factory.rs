//! Platform service factory
//!
//! Creates platform services based on configuration.

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;

/// Create a platform service from configuration
///
/// Resolves credentials (explicit token first, then the gh CLI) and builds
/// the client. No request is sent.
pub async fn create_platform_service(
    config: &PlatformConfig,
    token: Option<&str>,
) -> Result<Box<dyn PlatformService>> {
    let auth = get_github_auth(token, config.host.as_deref()).await?;
    Ok(Box::new(GitHubService::new(
        &auth.token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?))
}
