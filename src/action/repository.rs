//! Collaborator traits for the repository host

#[cfg(test)]
use mockall::automock;

use crate::action::error::GitHubError;
use crate::action::report::Report;
use crate::config::Target;

/// Trait for reading a file from a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the raw text content of `path` on the default branch
    async fn fetch_file(&self, owner: &str, repo: &str, path: &str)
    -> Result<String, GitHubError>;
}

/// Where a published report ended up
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublishedReport {
    /// Browser URL of the comment or issue, when the host returns one
    pub html_url: Option<String>,
}

/// Trait for publishing a report as a comment or issue
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReportPoster: Send + Sync {
    async fn post_report(
        &self,
        owner: &str,
        repo: &str,
        target: Target,
        report: &Report,
    ) -> Result<PublishedReport, GitHubError>;
}
