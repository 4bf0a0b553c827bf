//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PrState, PullRequest};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of open PRs requested from the listing endpoint (single page)
pub const LIST_PAGE_SIZE: u32 = 100;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

#[derive(Deserialize)]
struct ApiPullRequest {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    state: String,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    base: Option<ApiBranchRef>,
    #[serde(default)]
    head: Option<ApiBranchRef>,
}

#[derive(Deserialize)]
struct ApiBranchRef {
    #[serde(rename = "ref", default)]
    ref_field: Option<String>,
}

#[derive(Deserialize)]
struct ApiListedPullRequest {
    number: u64,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(pr: ApiPullRequest) -> Self {
        let branch = |r: Option<ApiBranchRef>| r.and_then(|r| r.ref_field).unwrap_or_default();
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            state: PrState::from_api(&pr.state, pr.draft),
            base_ref: branch(pr.base),
            head_ref: branch(pr.head),
        }
    }
}

/// GitHub service using the REST API over reqwest
pub struct GitHubService {
    client: Client,
    token: String,
    api_base: String,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` is `None` for github.com; any other host is treated as GitHub
    /// Enterprise and served from `https://{host}/api/v3`.
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let api_base = host.as_ref().map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        );

        let client = Client::builder()
            .user_agent(concat!("stacked-pr/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            api_base,
            config: PlatformConfig { owner, repo, host },
        })
    }

    /// Point the service at a different API root (GitHub Enterprise proxies, tests)
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls",
            self.api_base,
            urlencoding::encode(&self.config.owner),
            urlencoding::encode(&self.config.repo)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        let url = format!("{}/{number}", self.pulls_url());
        let pr: ApiPullRequest = self.get_json(&url, &[]).await?;
        Ok(pr.into())
    }

    async fn list_open_pull_requests(&self) -> Result<Vec<u64>> {
        let prs: Vec<ApiListedPullRequest> = self
            .get_json(
                &self.pulls_url(),
                &[
                    ("state", "open".to_string()),
                    ("per_page", LIST_PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        Ok(prs.into_iter().map(|pr| pr.number).collect())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_refs_default_to_empty() {
        let api: ApiPullRequest = serde_json::from_str(
            r#"{"number": 3, "title": "t", "body": null, "state": "open"}"#,
        )
        .unwrap();
        let pr = PullRequest::from(api);
        assert_eq!(pr.body, "");
        assert_eq!(pr.base_ref, "");
        assert_eq!(pr.head_ref, "");
        assert_eq!(pr.state, PrState::Open);
    }

    #[test]
    fn test_draft_flag_maps_to_draft_state() {
        let api: ApiPullRequest = serde_json::from_str(
            r#"{"number": 4, "title": "t", "body": "", "state": "open", "draft": true,
                "base": {"ref": "main"}, "head": {"ref": "feat"}}"#,
        )
        .unwrap();
        let pr = PullRequest::from(api);
        assert_eq!(pr.state, PrState::Draft);
        assert_eq!(pr.base_ref, "main");
        assert_eq!(pr.head_ref, "feat");
    }

    #[test]
    fn test_enterprise_api_base() {
        let service =
            GitHubService::new("t", "o".into(), "r".into(), Some("ghe.example.com".into()))
                .unwrap();
        assert_eq!(
            service.pulls_url(),
            "https://ghe.example.com/api/v3/repos/o/r/pulls"
        );
    }
}
