use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,

    #[error("Upstream URL cannot be empty")]
    EmptyUpstreamUrl,

    #[error("Upstream URL is not a valid absolute URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("Upstream URL must not end with a slash: {0}")]
    TrailingSlash(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
}

/// Gateway configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Listener for incoming requests
    pub listener: Listener,
    /// The app catalog backend this gateway fronts
    pub upstream: UpstreamConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}

/// Network listener configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Upstream server configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpstreamConfig {
    /// Base URL of the upstream service, e.g. "http://127.0.0.1:3000"
    ///
    /// Kept as a raw string: outbound request URLs are built by plain
    /// concatenation against this value, and a parsed `url::Url` would
    /// re-normalize the text (trailing slash, percent-encoding).
    pub url: String,
    /// Timeout for the full upstream request/response cycle, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::EmptyUpstreamUrl);
        }

        if let Err(e) = Url::parse(&self.url) {
            return Err(ValidationError::InvalidUpstreamUrl(format!(
                "{}: {e}",
                self.url
            )));
        }

        if self.url.ends_with('/') {
            return Err(ValidationError::TrailingSlash(self.url.clone()));
        }

        Ok(())
    }
}

pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let file = File::open(path)?;
    let config: Config = serde_yaml::from_reader(file)?;
    config.validate()?;

    Ok(config)
}
