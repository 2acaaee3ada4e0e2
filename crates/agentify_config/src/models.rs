// --- File: crates/agentify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- GitHub API Config ---
// Holds non-secret GitHub config. The lookup is unauthenticated; no token needed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API. Overridable so tests can point at a local stub.
    #[serde(default = "default_github_base_url")]
    pub base_url: String,
    /// Per-request timeout for the user lookup, in seconds.
    #[serde(default = "default_github_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent sent on outbound calls. GitHub rejects requests without one.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_github_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_timeout_secs() -> u64 {
    10
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            base_url: default_github_base_url(),
            timeout_secs: default_github_timeout_secs(),
            user_agent: None,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Optional Feature Configurations (defaults apply when the section is absent) ---
    #[serde(default)]
    pub github: GithubConfig,
}
