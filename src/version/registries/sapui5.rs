//! SAPUI5 CDN version overview implementation

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;
use crate::version::registry::{EocpRegistry, VersionOverview};

/// Registry implementation for `versionoverview.json` on the SAPUI5 CDN
pub struct Sapui5Registry {
    client: reqwest::Client,
    base_url: String,
}

impl Sapui5Registry {
    /// Creates a new Sapui5Registry with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl EocpRegistry for Sapui5Registry {
    async fn fetch_overview(&self) -> Result<VersionOverview, RegistryError> {
        let url = format!("{}/versionoverview.json", self.base_url);
        debug!("Fetching version overview from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| RegistryError::from_request(&url, e))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(url));
        }

        if !status.is_success() {
            warn!("Version overview returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let overview: VersionOverview = response.json().await.map_err(|e| {
            if e.is_timeout() {
                return RegistryError::Timeout(url.clone());
            }
            warn!("Failed to parse version overview: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!(
            "Version overview lists {} release lines and {} patches",
            overview.versions.len(),
            overview.patches.len()
        );

        Ok(overview)
    }
}
