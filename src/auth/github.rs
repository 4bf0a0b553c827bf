//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get GitHub authentication
///
/// Priority:
/// 1. explicit token (`--token`), when non-empty
/// 2. gh CLI (`gh auth token`, with `--hostname` for GitHub Enterprise hosts)
pub async fn get_github_auth(token: Option<&str>, host: Option<&str>) -> Result<GitHubAuthConfig> {
    if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    if let Some(token) = get_gh_cli_token(host).await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "gh CLI not authenticated. Run `gh auth login` or pass --token".to_string(),
    ))
}

async fn get_gh_cli_token(host: Option<&str>) -> Option<String> {
    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);
    if let Some(host) = host {
        cmd.args(["--hostname", host]);
    }

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(e) => {
            debug!("gh CLI unavailable: {e}");
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "gh auth token failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
