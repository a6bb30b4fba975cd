//! GitHub REST API implementation of the repository collaborators

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::action::error::GitHubError;
use crate::action::report::Report;
use crate::action::repository::{ContentSource, PublishedReport, ReportPoster};
use crate::config::{Target, USER_AGENT};

const API_VERSION: &str = "2022-11-28";

/// Response body of a created comment or issue
#[derive(Debug, Deserialize)]
struct CreatedResource {
    #[serde(default)]
    html_url: Option<String>,
}

/// GitHub API client authenticated with an access token
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Creates a new GitHubClient with a custom base URL and request timeout
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, GitHubError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// Map non-success statuses to errors, keeping the API's message
    async fn check_status(
        response: reqwest::Response,
        url: &str,
    ) -> Result<reqwest::Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        warn!("GitHub API returned status {}: {}", status, url);

        match status {
            reqwest::StatusCode::NOT_FOUND => Err(GitHubError::NotFound(url.to_string())),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(GitHubError::Unauthorized {
                    status: status.as_u16(),
                    message,
                })
            }
            _ => Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for GitHubClient {
    async fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<String, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            owner,
            repo,
            path.trim_start_matches('/')
        );
        debug!("Fetching {}", url);

        let response = self
            .get(&url)
            .header("Accept", "application/vnd.github.raw+json")
            .send()
            .await
            .map_err(|e| GitHubError::from_request(&url, e))?;
        let response = Self::check_status(response, &url).await?;

        response
            .text()
            .await
            .map_err(|e| GitHubError::from_request(&url, e))
    }
}

#[async_trait::async_trait]
impl ReportPoster for GitHubClient {
    async fn post_report(
        &self,
        owner: &str,
        repo: &str,
        target: Target,
        report: &Report,
    ) -> Result<PublishedReport, GitHubError> {
        let (url, payload) = match target {
            Target::PullRequest(number) => (
                format!(
                    "{}/repos/{}/{}/issues/{}/comments",
                    self.base_url, owner, repo, number
                ),
                json!({ "body": report.body }),
            ),
            Target::NewIssue => (
                format!("{}/repos/{}/{}/issues", self.base_url, owner, repo),
                json!({ "title": report.title, "body": report.body }),
            ),
        };
        debug!("Posting report to {}", url);

        let response = self
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GitHubError::from_request(&url, e))?;
        let response = Self::check_status(response, &url).await?;

        let html_url = response
            .json::<CreatedResource>()
            .await
            .inspect_err(|e| warn!("Failed to parse GitHub response for {}: {}", url, e))
            .ok()
            .and_then(|created| created.html_url);

        Ok(PublishedReport { html_url })
    }
}
