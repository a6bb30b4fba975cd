//! Registry trait and the SAPUI5 version overview lookup

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::parser::types::VersionIdentifier;
use crate::version::error::RegistryError;
use crate::version::quarter::{QuarterParseError, QuarterYear};

/// Trait for fetching the SAPUI5 version overview
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait EocpRegistry: Send + Sync {
    /// Fetches the full version overview
    ///
    /// # Returns
    /// * `Ok(VersionOverview)` - Release lines and patch records in document order
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_overview(&self) -> Result<VersionOverview, RegistryError>;
}

/// The `versionoverview.json` document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VersionOverview {
    /// Release lines such as "1.96.*"
    #[serde(default)]
    pub versions: Vec<ReleaseLine>,
    /// Individual patch releases such as "1.96.8"
    pub patches: Vec<PatchEntry>,
}

/// A patch release entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchEntry {
    pub version: String,
    #[serde(default)]
    pub eocp: Option<String>,
}

/// A release line entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseLine {
    pub version: String,
    #[serde(default)]
    pub support: Option<String>,
    #[serde(default)]
    pub lts: bool,
    #[serde(default)]
    pub eocp: Option<String>,
}

/// The EOCP of one patch release, exactly as the registry states it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EocpRecord {
    pub version: VersionIdentifier,
    /// Raw "Qn/YYYY" string, empty when the entry has none
    pub eocp: String,
}

impl EocpRecord {
    pub fn quarter_year(&self) -> Result<QuarterYear, QuarterParseError> {
        self.eocp.parse()
    }
}

impl VersionOverview {
    /// Find the EOCP record of a patch release
    ///
    /// Exact match on the version string. Should the overview list a version
    /// twice, the first entry in document order wins, even when it lacks an
    /// EOCP. Such a record fails [`EocpRecord::quarter_year`].
    pub fn lookup_eocp(&self, version: &VersionIdentifier) -> Option<EocpRecord> {
        self.patches
            .iter()
            .find(|patch| patch.version == version.as_str())
            .map(|patch| EocpRecord {
                version: version.clone(),
                eocp: patch.eocp.clone().unwrap_or_default(),
            })
    }

    /// Find the release line ("1.96.*") a patch release belongs to
    pub fn release_line(&self, version: &VersionIdentifier) -> Option<&ReleaseLine> {
        let line = version.release_line()?;
        self.versions.iter().find(|entry| {
            entry
                .version
                .strip_suffix(".*")
                .is_some_and(|prefix| prefix == line)
        })
    }
}
