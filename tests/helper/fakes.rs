//! In-memory collaborators

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use ui5_eocp_check::action::error::GitHubError;
use ui5_eocp_check::action::report::Report;
use ui5_eocp_check::action::repository::{ContentSource, PublishedReport, ReportPoster};
use ui5_eocp_check::config::Target;
use ui5_eocp_check::version::error::RegistryError;
use ui5_eocp_check::version::registry::{EocpRegistry, PatchEntry, VersionOverview};

/// Fake version overview that counts how often it was fetched
pub struct FakeRegistry {
    overview: VersionOverview,
    fetches: AtomicUsize,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self {
            overview: VersionOverview::default(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_patch(mut self, version: &str, eocp: &str) -> Self {
        self.overview.patches.push(PatchEntry {
            version: version.to_string(),
            eocp: Some(eocp.to_string()),
        });
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EocpRegistry for FakeRegistry {
    async fn fetch_overview(&self) -> Result<VersionOverview, RegistryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.overview.clone())
    }
}

/// Fake repository host serving one file and recording posted reports
pub struct FakeRepository {
    files: Vec<(String, String)>,
    posted: Mutex<Vec<(Target, Report)>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            posted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    pub fn posted(&self) -> Vec<(Target, Report)> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for FakeRepository {
    async fn fetch_file(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
    ) -> Result<String, GitHubError> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| GitHubError::NotFound(path.to_string()))
    }
}

#[async_trait]
impl ReportPoster for FakeRepository {
    async fn post_report(
        &self,
        _owner: &str,
        _repo: &str,
        target: Target,
        report: &Report,
    ) -> Result<PublishedReport, GitHubError> {
        self.posted.lock().unwrap().push((target, report.clone()));
        Ok(PublishedReport::default())
    }
}
