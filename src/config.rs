use crate::types::{DigestError, FeedDescriptor, Result};
use serde::Deserialize;
use std::path::Path;
use url::Url;

fn default_email_method() -> String {
    "print".to_string()
}

/// Immutable run configuration, loaded once at process start and passed by
/// reference into each pipeline stage.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Recipient address for the rendered digest.
    pub email: String,
    pub feeds: Vec<FeedDescriptor>,
    pub research_interests: String,
    /// How many papers the ranking service is asked to return.
    pub max_papers: usize,
    /// Delivery channel: "print" (local preview) or "gmail" (SMTP).
    #[serde(default = "default_email_method")]
    pub email_method: String,
}

impl RunConfig {
    /// Read and validate the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DigestError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&raw)
    }

    /// Parse and validate configuration from a YAML document.
    pub fn parse(raw: &str) -> Result<Self> {
        let config: RunConfig = serde_yaml::from_str(raw)
            .map_err(|e| DigestError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(DigestError::Config("email must not be empty".to_string()));
        }
        if self.feeds.is_empty() {
            return Err(DigestError::Config("no feeds configured".to_string()));
        }
        for feed in &self.feeds {
            Url::parse(&feed.url).map_err(|e| {
                DigestError::Config(format!("invalid URL for feed '{}': {}", feed.name, e))
            })?;
        }
        if self.max_papers == 0 {
            return Err(DigestError::Config(
                "max_papers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
