//! Request/response pipeline.
//!
//! One [`Transport`] wraps a shared `reqwest::Client`. Every call builds its
//! own encoded parameter set and decode target, so a single transport can be
//! cloned into many tasks and used concurrently.

use base64::Engine;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::encode::{FormEncode, encode};
use crate::{ApiError, ClientConfig, PayrexError, Result};

/// Content type of request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Whether a status decodes as success. Only 2xx does; 1xx and 3xx take
/// the error path like 4xx and 5xx.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Authenticated HTTP transport for the PayRex API.
#[derive(Clone)]
pub struct Transport {
    inner: reqwest::Client,
    config: Arc<ClientConfig>,
    authorization: HeaderValue,
}

impl Transport {
    /// Build a transport from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PayrexError::Construction(format!("could not build HTTP client: {e}")))?;

        let authorization = basic_authorization(config.api_key.expose_secret())?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            authorization,
        })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and decode the response into `T`.
    ///
    /// `segments` are appended to the base URL one path segment each, with
    /// `/`, `?` and `#` percent-encoded, so an id can never leave its
    /// segment. With `params`, POST and PUT carry the encoded pairs as a
    /// form body; every other method carries them as the query string.
    /// Without `params` the request has neither.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        params: Option<&(dyn FormEncode + Sync)>,
    ) -> Result<T> {
        let mut url = self.url_for(segments)?;
        let path = url.path().to_owned();
        let encoded = params.map(|p| encode(p).to_urlencoded());

        let body = match encoded {
            Some(encoded) if carries_body(&method) => Some(encoded),
            Some(query) => {
                if !query.is_empty() {
                    url.set_query(Some(&query));
                }
                None
            }
            None => None,
        };

        let mut request = self
            .inner
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.authorization.clone());

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        debug!(method = %method, path = %path, "Sending PayRex request");

        let response = request.send().await.map_err(|e| {
            debug!(method = %method, path = %path, error = %e, "PayRex request failed");
            PayrexError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(method = %method, path = %path, status, "PayRex response received");

        decode_response(status, &body)
    }

    fn url_for(&self, segments: &[&str]) -> Result<url::Url> {
        let base = &self.config.base_url;
        let mut url = url::Url::parse(base)
            .map_err(|e| PayrexError::Construction(format!("invalid base URL '{base}': {e}")))?;

        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(PayrexError::Construction(format!(
                "invalid path segment '{bad}'"
            )));
        }

        url.path_segments_mut()
            .map_err(|_| PayrexError::Construction(format!("base URL '{base}' cannot hold a path")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

/// `Basic base64("<key>:")`, marked sensitive.
fn basic_authorization(api_key: &str) -> Result<HeaderValue> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{api_key}:"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| PayrexError::Construction(format!("invalid API key: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Classify by status and decode either `T` or the error envelope.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if is_success_status(status) {
        return serde_json::from_slice(body).map_err(PayrexError::Decode);
    }

    let mut err: ApiError = serde_json::from_slice(body)
        .map_err(|source| PayrexError::ErrorBodyDecode { status, source })?;
    err.status = status;

    warn!(
        status,
        codes = ?err.errors.iter().map(|e| e.code.as_str()).collect::<Vec<_>>(),
        "PayRex API returned an error"
    );

    Err(PayrexError::Api(err))
}
