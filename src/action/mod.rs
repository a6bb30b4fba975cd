//! CI action layer
//!
//! This module talks to the repository host and sequences one EOCP check run.
//!
//! # Modules
//!
//! - [`repository`]: Collaborator traits for fetching files and publishing reports
//! - [`github`]: GitHub REST API implementation of the collaborator traits
//! - [`report`]: Renders the check result as Markdown
//! - [`pipeline`]: Runs extraction, lookup, classification and publishing in order
//! - [`error`]: Error types for a check run

pub mod error;
pub mod github;
pub mod pipeline;
pub mod report;
pub mod repository;
