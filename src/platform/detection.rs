//! Pull request URL parsing

use crate::error::{Error, Result};
use crate::types::{PlatformConfig, PrUrl};

/// Parse a pull request URL of the form `HOST/OWNER/REPO/pull/NUMBER`
///
/// The scheme is optional and anything after the number (`/files`, query,
/// fragment) is ignored. `github.com` maps to `host: None`; any other host is
/// kept for GitHub Enterprise.
pub fn parse_pr_url(input: &str) -> Result<PrUrl> {
    let invalid = || Error::InvalidUrl(format!("{input} (expected HOST/OWNER/REPO/pull/NUMBER)"));

    let trimmed = input.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = url::Url::parse(&with_scheme).map_err(|_| invalid())?;
    let hostname = url.host_str().ok_or_else(invalid)?.to_ascii_lowercase();

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let [owner, repo, kind, number, ..] = segments.as_slice() else {
        return Err(invalid());
    };
    if *kind != "pull" {
        return Err(invalid());
    }

    let number: u64 = number.parse().map_err(|_| invalid())?;
    if number == 0 {
        return Err(invalid());
    }

    let host = if matches!(hostname.as_str(), "github.com" | "www.github.com") {
        None
    } else {
        Some(hostname)
    };

    Ok(PrUrl {
        config: PlatformConfig {
            owner: (*owner).to_string(),
            repo: (*repo).to_string(),
            host,
        },
        number,
    })
}
