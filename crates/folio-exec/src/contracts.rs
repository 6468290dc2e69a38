use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRequest {
    pub url: String,
    pub delay_ms: u64,
}

impl OpenRequest {
    pub fn new(url: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            url: url.into(),
            delay_ms,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("refusing to open non-web url '{0}'")]
    UnsupportedScheme(String),
    #[error("failed to launch browser for '{url}': {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
