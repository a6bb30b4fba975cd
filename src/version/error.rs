use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Version overview not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl RegistryError {
    /// Classify a reqwest error, keeping timeouts apart from other network failures
    pub fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RegistryError::Timeout(url.to_string())
        } else {
            RegistryError::Network(err)
        }
    }
}
