//! One EOCP check run: fetch, extract, look up, classify, report, publish

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::action::error::ActionError;
use crate::action::report::{Report, format_report};
use crate::action::repository::{ContentSource, PublishedReport, ReportPoster};
use crate::config::ActionConfig;
use crate::parser::types::VersionIdentifier;
use crate::parser::ui5_bootstrap::Ui5BootstrapParser;
use crate::version::quarter::{QuarterYear, current_quarter_year};
use crate::version::registry::EocpRegistry;
use crate::version::urgency::{UrgencyTier, classify};

/// Characters of file content quoted when no version is found
const SNIPPET_CHARS: usize = 80;

/// Whether the CI run should pass or fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Pass,
    Fail { message: String },
}

impl BuildStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, BuildStatus::Fail { .. })
    }
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub version: VersionIdentifier,
    /// Raw EOCP as listed in the version overview
    pub eocp: String,
    pub current: QuarterYear,
    pub tier: UrgencyTier,
    pub report: Report,
    pub build_status: BuildStatus,
}

/// Decide the build status for a tier
pub fn build_status(tier: UrgencyTier, fail_on_urgent: bool) -> BuildStatus {
    if fail_on_urgent && tier.fails_build() {
        BuildStatus::Fail {
            message: tier.message().to_string(),
        }
    } else {
        BuildStatus::Pass
    }
}

/// Wires the parser and the external collaborators of a check run
pub struct EocpCheck {
    parser: Ui5BootstrapParser,
    content: Arc<dyn ContentSource>,
    registry: Arc<dyn EocpRegistry>,
    poster: Arc<dyn ReportPoster>,
}

impl EocpCheck {
    pub fn new(
        content: Arc<dyn ContentSource>,
        registry: Arc<dyn EocpRegistry>,
        poster: Arc<dyn ReportPoster>,
    ) -> Self {
        Self {
            parser: Ui5BootstrapParser::new(),
            content,
            registry,
            poster,
        }
    }

    /// Run the check without publishing anything
    pub async fn evaluate(
        &self,
        config: &ActionConfig,
        now: DateTime<Utc>,
    ) -> Result<CheckOutcome, ActionError> {
        let content = self
            .content
            .fetch_file(&config.owner, &config.repo, &config.path_to_index)
            .await?;
        debug!(
            "Fetched {} bytes from {}/{}/{}",
            content.len(),
            config.owner,
            config.repo,
            config.path_to_index
        );

        let Some(version) = self.parser.extract_version(&content) else {
            return Err(ActionError::Extraction {
                path: config.path_to_index.clone(),
                length: content.len(),
                snippet: content.chars().take(SNIPPET_CHARS).collect(),
            });
        };
        info!("Detected SAPUI5 version {}", version);

        let overview = self.registry.fetch_overview().await?;
        let Some(record) = overview.lookup_eocp(&version) else {
            return Err(ActionError::Lookup {
                version: version.to_string(),
            });
        };

        let eocp = record
            .quarter_year()
            .map_err(|source| ActionError::MalformedEocp {
                version: version.to_string(),
                raw: record.eocp.clone(),
                source,
            })?;

        let current = current_quarter_year(now);
        let tier = classify(eocp, current);
        let report = format_report(current, &record, tier, overview.release_line(&version));
        let build_status = build_status(tier, config.fail_on_urgent);

        info!(
            version = %version,
            eocp = %record.eocp,
            current = %current,
            tier = tier.as_str(),
            fail = build_status.is_failure(),
            "Classified EOCP urgency"
        );

        Ok(CheckOutcome {
            version,
            eocp: record.eocp,
            current,
            tier,
            report,
            build_status,
        })
    }

    /// Run the check and publish the report
    ///
    /// Nothing is published when any step before publishing fails.
    pub async fn run(
        &self,
        config: &ActionConfig,
        now: DateTime<Utc>,
    ) -> Result<CheckOutcome, ActionError> {
        let outcome = self.evaluate(config, now).await?;

        let published: PublishedReport = self
            .poster
            .post_report(&config.owner, &config.repo, config.target, &outcome.report)
            .await?;

        match published.html_url {
            Some(url) => info!("Published report to {}", url),
            None => warn!("Published report to {} without a link back", config.target),
        }

        Ok(outcome)
    }
}
