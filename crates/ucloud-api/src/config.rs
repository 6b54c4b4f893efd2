//! Client configuration.

use crate::error::Error;
use serde::Deserialize;

/// Default API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.ucloud.cn";

/// Configuration for building a [`crate::Client`].
///
/// `public_key`, `private_key` and `region` are mandatory and validated
/// before any call can be made; `endpoint` falls back to
/// [`DEFAULT_ENDPOINT`] and `project_id` is only sent when set. All fields
/// are read-only once the client is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Account public key, sent as the `PublicKey` identity parameter.
    pub public_key: String,
    /// Account private key; participates in signing only and never leaves
    /// the client.
    pub private_key: String,
    /// Region, sent as the `Region` identity parameter.
    pub region: String,
    /// Optional project id, sent as `ProjectId` when present.
    #[serde(default)]
    pub project_id: Option<String>,
    /// API endpoint override.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with the three mandatory fields.
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            region: region.into(),
            project_id: None,
            endpoint: None,
        }
    }

    /// Set the project id.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Override the API endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load configuration from `UCLOUD_*` environment variables
    /// (`UCLOUD_PUBLIC_KEY`, `UCLOUD_PRIVATE_KEY`, `UCLOUD_REGION`, and
    /// optionally `UCLOUD_PROJECT_ID` and `UCLOUD_ENDPOINT`).
    pub fn from_env() -> Result<Self, Error> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("UCLOUD"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Check that every mandatory field is non-empty, naming the first
    /// missing one.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.public_key.is_empty() {
            return Err(Error::InvalidClientField("public_key"));
        }
        if self.private_key.is_empty() {
            return Err(Error::InvalidClientField("private_key"));
        }
        if self.region.is_empty() {
            return Err(Error::InvalidClientField("region"));
        }
        Ok(())
    }
}
