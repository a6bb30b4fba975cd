//! Parsers that locate the SAPUI5 version referenced by repository files
//!
//! # Modules
//!
//! - [`ui5_bootstrap`]: Finds the CDN bootstrap URL and extracts its version
//! - [`types`]: Common types like `VersionIdentifier`

pub mod types;
pub mod ui5_bootstrap;
