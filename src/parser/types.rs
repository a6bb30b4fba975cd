//! Common types for parsers

use std::fmt;

/// A SAPUI5 release as referenced in a bootstrap URL (e.g. "1.96.8")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentifier(String);

impl VersionIdentifier {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the release line key ("1.96") used by the version overview.
    ///
    /// None when the identifier does not have at least a major and minor part.
    pub fn release_line(&self) -> Option<&str> {
        let mut dots = self.0.match_indices('.');
        let (minor_dot, _) = dots.next()?;
        match dots.next() {
            Some((patch_dot, _)) => Some(&self.0[..patch_dot]),
            None if minor_dot + 1 < self.0.len() => Some(&self.0),
            None => None,
        }
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
