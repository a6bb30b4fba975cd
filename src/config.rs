use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Endpoint and transport constants
// =============================================================================

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default base URL of the SAPUI5 CDN serving `versionoverview.json`
pub const DEFAULT_REGISTRY_URL: &str = "https://sapui5.hana.ondemand.com";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Target value that opens a new issue instead of commenting
pub const NEW_ISSUE_TARGET: &str = "new-issue";

/// Where the report is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Comment on an existing pull request (or issue) by number
    PullRequest(u64),
    /// Open a new issue carrying the report
    NewIssue,
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(NEW_ISSUE_TARGET) {
            return Ok(Target::NewIssue);
        }
        match s.parse::<u64>() {
            Ok(number) if number > 0 => Ok(Target::PullRequest(number)),
            _ => Err(format!(
                "expected a pull request number or \"{}\"",
                NEW_ISSUE_TARGET
            )),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::PullRequest(number) => write!(f, "#{}", number),
            Target::NewIssue => f.write_str(NEW_ISSUE_TARGET),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required input: {0}")]
    Missing(&'static str),

    #[error("Invalid value for input {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Raw action inputs as received from the command line or the environment
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub target: Option<String>,
    pub token: Option<String>,
    pub path_to_index: Option<String>,
    pub fail_on_urgent: Option<String>,
    pub github_api_url: Option<String>,
    pub registry_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Validated configuration for one run
#[derive(Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub owner: String,
    pub repo: String,
    pub target: Target,
    pub token: String,
    pub path_to_index: String,
    pub fail_on_urgent: bool,
    pub github_api_url: String,
    pub registry_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("target", &self.target)
            .field("token", &"***")
            .field("path_to_index", &self.path_to_index)
            .field("fail_on_urgent", &self.fail_on_urgent)
            .field("github_api_url", &self.github_api_url)
            .field("registry_url", &self.registry_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ActionConfig {
    /// Validate raw inputs. Blank values count as missing.
    pub fn from_inputs(inputs: ActionInputs) -> Result<Self, ConfigError> {
        let owner = required("owner", inputs.owner)?;
        let repo = required("repo", inputs.repo)?;
        let target: Target = required("target", inputs.target)?
            .parse()
            .map_err(|reason| ConfigError::Invalid {
                name: "target",
                reason,
            })?;
        let token = required("token", inputs.token)?;
        let path_to_index = required("path_to_index", inputs.path_to_index)?;
        let fail_on_urgent = parse_bool(
            "fail_on_urgent",
            &required("fail_on_urgent", inputs.fail_on_urgent)?,
        )?;

        let timeout_ms = inputs.timeout_ms.unwrap_or(FETCH_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                name: "timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            owner,
            repo,
            target,
            token,
            path_to_index,
            fail_on_urgent,
            github_api_url: optional(inputs.github_api_url)
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            registry_url: optional(inputs.registry_url)
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::Missing(name))
}

/// Booleans follow the YAML 1.2 core schema used by GitHub Actions inputs
fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected true or false, got {:?}", other),
        }),
    }
}
