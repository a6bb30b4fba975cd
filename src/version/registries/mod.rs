//! Registry implementations for fetching the version overview

pub mod sapui5;

pub use sapui5::Sapui5Registry;
