//! Version lifecycle layer for SAPUI5 releases
//!
//! This module provides the core functionality for looking up a release's end of
//! cloud provisioning (EOCP) and deciding how urgently it must be upgraded.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Overview   │────▶│   Urgency   │
//! │  (fetch)    │     │  (lookup)   │     │  (classify) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ▼                                       │
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │   Quarter   │
//! │  (sapui5)   │                         │  (clock)    │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait and the version overview lookup
//! - [`registries`]: Concrete registry implementations
//! - [`quarter`]: Quarter/year keys and the current-quarter clock
//! - [`urgency`]: Upgrade urgency classification
//! - [`error`]: Error types for registry operations

pub mod error;
pub mod quarter;
pub mod registries;
pub mod registry;
pub mod urgency;
