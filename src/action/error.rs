use thiserror::Error;

use crate::config::ConfigError;
use crate::version::error::RegistryError;
use crate::version::quarter::QuarterParseError;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl GitHubError {
    /// Classify a reqwest error, keeping timeouts apart from other network failures
    pub fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GitHubError::Timeout(url.to_string())
        } else {
            GitHubError::Network(err)
        }
    }
}

/// Every way a check run can fail. All of them are fatal for the run.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "No SAPUI5 bootstrap URL found in {path} ({length} bytes, starts with {snippet:?})"
    )]
    Extraction {
        path: String,
        length: usize,
        snippet: String,
    },

    #[error("SAPUI5 version {version} is not listed in the version overview")]
    Lookup { version: String },

    #[error("Version overview lists malformed EOCP {raw:?} for {version}: {source}")]
    MalformedEocp {
        version: String,
        raw: String,
        #[source]
        source: QuarterParseError,
    },

    #[error("Failed to fetch the version overview: {0}")]
    Registry(#[from] RegistryError),

    #[error("GitHub request failed: {0}")]
    GitHub(#[from] GitHubError),
}

impl ActionError {
    /// Short category name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ActionError::Config(_) => "configuration",
            ActionError::Extraction { .. } => "extraction",
            ActionError::Lookup { .. } | ActionError::MalformedEocp { .. } => "lookup",
            ActionError::Registry(_) | ActionError::GitHub(_) => "transport",
        }
    }
}
