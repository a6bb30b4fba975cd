//! SAPUI5 bootstrap URL parser
//!
//! Applications load SAPUI5 from the SAP CDN with a versioned URL, usually in
//! the bootstrap script tag of `index.html`:
//!
//! ```text
//! <script id="sap-ui-bootstrap"
//!     src="https://sapui5.hana.ondemand.com/1.96.8/resources/sap-ui-core.js">
//! ```

use regex::Regex;
use tracing::debug;

use crate::parser::types::VersionIdentifier;

/// Parser for files that bootstrap SAPUI5 from the CDN
pub struct Ui5BootstrapParser {
    /// Regex for the CDN URL: `https://sapui5.hana.ondemand.com/<version>/resources/`
    bootstrap_url_re: Regex,
}

impl Ui5BootstrapParser {
    pub fn new() -> Self {
        Self {
            // The version is a single path segment; stopping at quotes and
            // whitespace keeps two URLs on one line from merging.
            bootstrap_url_re: Regex::new(
                r#"(?i)https://sapui5\.hana\.ondemand\.com/([^/\s"'<>]+)/resources/"#,
            )
            .unwrap(),
        }
    }

    /// Extract the version of the first bootstrap URL found in `content`
    ///
    /// Returns None when the content does not reference the CDN.
    pub fn extract_version(&self, content: &str) -> Option<VersionIdentifier> {
        let version = self
            .bootstrap_url_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| VersionIdentifier::new(m.as_str()));

        debug!("Extracted SAPUI5 version: {:?}", version);
        version
    }
}

impl Default for Ui5BootstrapParser {
    fn default() -> Self {
        Self::new()
    }
}
