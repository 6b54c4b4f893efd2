//! Signed HTTP transport for the API.
//!
//! A [`Client`] turns an encoded parameter set into a signed GET against the
//! configured endpoint, decodes the JSON body into the caller's typed
//! response, and checks the remote status code. Transport and decode
//! failures are surfaced unmodified; nothing is retried here.

use crate::config::{ClientConfig, DEFAULT_ENDPOINT};
use crate::error::{Error, Result};
use crate::params::{self, ParameterSet, Request};
use crate::response::Response;
use crate::signature;
use std::fmt;
use url::Url;

/// API client.
///
/// Cheap to clone (the underlying HTTP client is reference-counted) and safe
/// to share across tasks: all configuration is read-only after construction,
/// so concurrent calls need no locking.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    public_key: String,
    private_key: String,
    project_id: Option<String>,
    region: String,
}

impl Client {
    /// Build a client, validating the mandatory configuration fields and
    /// the endpoint URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = Url::parse(config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            public_key: config.public_key,
            private_key: config.private_key,
            project_id: config.project_id,
            region: config.region,
        })
    }

    /// The configured region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Encode a typed request, then issue it.
    pub async fn call<Q, R>(&self, request: &Q) -> Result<R>
    where
        Q: Request,
        R: Response,
    {
        let params = params::encode(request)?;
        self.call_params(params).await
    }

    /// Issue a call from an already-built parameter set.
    ///
    /// The identity parameters (`PublicKey`, `Region`, and `ProjectId` when
    /// configured) are merged in before signing, so they participate in the
    /// signature. The `Signature` parameter itself is appended last, after
    /// all other parameters.
    ///
    /// A response whose `RetCode` is non-zero becomes
    /// [`Error::BadRetCode`]; the action name is recovered from the outgoing
    /// parameters when the body does not echo one.
    pub async fn call_params<R: Response>(&self, mut params: ParameterSet) -> Result<R> {
        params.set("PublicKey", self.public_key.as_str());
        params.set("Region", self.region.as_str());
        if let Some(project_id) = &self.project_id {
            params.set("ProjectId", project_id.as_str());
        }

        let url = self.signed_url(&params);
        tracing::debug!(url = %url, "sending API request");

        let body = self.http.get(url).send().await?.text().await?;
        tracing::trace!(body = %body, "API response body");

        let response: R = serde_json::from_str(&body)?;
        if response.ret_code() != 0 {
            let action = response
                .action()
                .or_else(|| params.get("Action"))
                .unwrap_or_default()
                .to_string();
            let err = Error::BadRetCode {
                action,
                ret_code: response.ret_code(),
                message: response.message().to_string(),
            };
            tracing::debug!(error = %err, "API reported failure");
            return Err(err);
        }

        Ok(response)
    }

    /// Build the full request URL: every parameter in sorted order, then the
    /// signature computed over all of them.
    fn signed_url(&self, params: &ParameterSet) -> Url {
        let signature = signature::sign(params, &self.private_key);
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params.iter() {
                query.append_pair(name, value);
            }
            query.append_pair("Signature", &signature);
        }
        url
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // private_key is deliberately left out
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("public_key", &self.public_key)
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .finish()
    }
}
