// --- File: crates/agentify_dialogflow/src/github.rs ---

use agentify_common::http::client::HTTP_CLIENT;
use agentify_config::GithubConfig;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// User-Agent sent when the config does not set one. GitHub rejects
/// requests without a User-Agent header outright.
const DEFAULT_USER_AGENT: &str = "agentify-fulfillment";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("GitHub API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("GitHub API returned an error: Status={status}")]
    ApiError { status: u16 },
    #[error("Failed to parse GitHub API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// The slice of the GitHub user payload the agent reports on.
#[derive(Deserialize, Debug, Clone)]
pub struct GithubUser {
    pub followers: u64,
}

/// Looks up a GitHub user via `GET {base_url}/users/{username}`.
///
/// Only status 200 counts as success; every other status, and any network
/// or parse failure, surfaces as a `GithubError`. No retry.
pub async fn fetch_github_user(
    config: &GithubConfig,
    username: &str,
) -> Result<GithubUser, GithubError> {
    let url = format!(
        "{}/users/{}",
        config.base_url.trim_end_matches('/'),
        username
    );
    info!("[GitHub Logic] Looking up user '{}'", username);

    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let response = HTTP_CLIENT
        .get(&url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .timeout(Duration::from_secs(config.timeout_secs))
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        error!(
            "[GitHub Logic] Lookup for '{}' failed with status {}",
            username, status
        );
        return Err(GithubError::ApiError {
            status: status.as_u16(),
        });
    }

    let body_text = response.text().await?;
    let user: GithubUser = serde_json::from_str(&body_text)?;
    Ok(user)
}
