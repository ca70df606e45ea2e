use std::time::Duration;

use home_types::SessionToken;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{extract_message, ClientError};

/// Handle to the listing REST API. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(baseUrl: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(baseUrl, builder.build()?))
    }

    pub fn with_client(baseUrl: &str, http: Client) -> Self {
        Self {
            base_url: baseUrl.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    pub(crate) fn authorized(request: RequestBuilder, session: &SessionToken) -> RequestBuilder {
        request.header(header::AUTHORIZATION, session.bearer())
    }

    /// Sends the request and turns any non-2xx status into `ClientError::Status`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            warn!("request to {} failed: {e}", self.base_url);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        debug!("{} -> {status}", response.url());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = extract_message(&body);
        warn!("upstream returned {status}: {}", message.as_deref().unwrap_or("-"));
        Err(ClientError::Status { status, message })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
