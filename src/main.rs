use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ui5_eocp_check::action::error::ActionError;
use ui5_eocp_check::action::github::GitHubClient;
use ui5_eocp_check::action::pipeline::{BuildStatus, EocpCheck};
use ui5_eocp_check::config::{ActionConfig, ActionInputs};
use ui5_eocp_check::version::registries::Sapui5Registry;

/// Exit code when EOCP has lapsed and failing on urgent EOCP is enabled
const EXIT_URGENT: u8 = 1;

/// Exit code when the check itself could not complete
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "ui5-eocp-check")]
#[command(
    version,
    about = "Report the end of cloud provisioning of the SAPUI5 version a repository uses"
)]
struct Cli {
    /// Repository owner
    #[arg(long, env = "INPUT_OWNER")]
    owner: Option<String>,

    /// Repository name
    #[arg(long, env = "INPUT_REPO")]
    repo: Option<String>,

    /// Pull request number to comment on, or "new-issue"
    #[arg(long, env = "INPUT_TARGET")]
    target: Option<String>,

    /// Access token for the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path of the file bootstrapping SAPUI5
    #[arg(long, env = "INPUT_PATH_TO_INDEX")]
    path_to_index: Option<String>,

    /// Fail the run when EOCP has already passed ("true" or "false")
    #[arg(long, env = "INPUT_FAIL_ON_URGENT")]
    fail_on_urgent: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,

    /// Base URL serving versionoverview.json
    #[arg(long, env = "INPUT_REGISTRY_URL")]
    registry_url: Option<String>,

    /// Timeout for each HTTP request in milliseconds
    #[arg(long, env = "INPUT_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn inputs(&self) -> ActionInputs {
        ActionInputs {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            target: self.target.clone(),
            token: self.token.clone(),
            path_to_index: self.path_to_index.clone(),
            fail_on_urgent: self.fail_on_urgent.clone(),
            github_api_url: self.github_api_url.clone(),
            registry_url: self.registry_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Escape workflow command data: `%`, CR and LF
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Print a GitHub Actions workflow command so the message shows up as an annotation
fn annotate_error(message: &str) {
    println!("::error::{}", escape_workflow_data(message));
}

async fn run(config: ActionConfig) -> Result<BuildStatus, ActionError> {
    let github = Arc::new(GitHubClient::new(
        &config.github_api_url,
        &config.token,
        config.timeout,
    )?);
    let registry = Arc::new(Sapui5Registry::new(&config.registry_url, config.timeout)?);

    let check = EocpCheck::new(github.clone(), registry, github);
    let outcome = check.run(&config, chrono::Utc::now()).await?;

    Ok(outcome.build_status)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match ActionConfig::from_inputs(cli.inputs()) {
        Ok(config) => config,
        Err(e) => {
            let e = ActionError::from(e);
            error!(kind = e.kind(), "{}", e);
            annotate_error(&e.to_string());
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };
    info!("Starting EOCP check: {:?}", config);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start async runtime: {}", e);
            annotate_error(&format!("Failed to start async runtime: {}", e));
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };
    let result = runtime.block_on(run(config));

    match result {
        Ok(BuildStatus::Pass) => Ok(ExitCode::SUCCESS),
        Ok(BuildStatus::Fail { message }) => {
            error!("{}", message);
            annotate_error(&message);
            Ok(ExitCode::from(EXIT_URGENT))
        }
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            annotate_error(&e.to_string());
            Ok(ExitCode::from(EXIT_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain message", "plain message")]
    #[case("100% done", "100%25 done")]
    #[case("line one\nline two", "line one%0Aline two")]
    #[case("line one\r\nline two", "line one%0D%0Aline two")]
    #[case("%0A literal", "%250A literal")]
    fn escape_workflow_data_escapes_percent_and_line_breaks(
        #[case] message: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(escape_workflow_data(message), expected);
    }
}
