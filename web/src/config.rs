//! Backend connection settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://[::1]:50051";

/// Errors raised while validating [`BackendSettings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The URL does not parse.
    #[error("invalid backend url `{url}`: {message}")]
    InvalidUrl { url: String, message: String },
    /// The URL uses a scheme other than http or https.
    #[error("backend url `{url}` must use http or https")]
    UnsupportedScheme { url: String },
}

/// Where and how patiently to reach the games backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DARTS_BACKEND")]
pub struct BackendSettings {
    /// gRPC endpoint of the games backend.
    pub url: Option<String>,
    /// Upper bound for establishing a connection, in milliseconds.
    #[ortho_config(default = 1_000)]
    pub connect_timeout_ms: u64,
    /// Upper bound for one remote call, in milliseconds.
    #[ortho_config(default = 5_000)]
    pub request_timeout_ms: u64,
}

impl BackendSettings {
    /// Return the validated backend URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL does not parse or does not use an
    /// HTTP scheme.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let raw = self.url.as_deref().unwrap_or(DEFAULT_BACKEND_URL);
        let url = Url::parse(raw).map_err(|error| ConfigError::InvalidUrl {
            url: raw.to_owned(),
            message: error.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::UnsupportedScheme {
                url: raw.to_owned(),
            }),
        }
    }

    /// Connect timeout; zero is raised to one millisecond.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms.max(1))
    }

    /// Per-call timeout; zero is raised to one millisecond.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }
}
