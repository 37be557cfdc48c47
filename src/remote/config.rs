use std::time::Duration;

/// Connection settings for a remote collaborator service.
///
/// Plain constructor data; nothing here is read from the environment.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL without a trailing slash, e.g. "https://crud.example.com/api".
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
