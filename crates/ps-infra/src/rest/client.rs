use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use ps_core::ports::RemoteServiceError;
use ps_core::ClientConfig;

/// Thin JSON/HTTP client for the daemon's REST API.
///
/// The daemon answers errors as plain-text bodies with a non-2xx status;
/// those become [`RemoteServiceError::Rejected`] with the body as message.
/// Everything that fails before a response arrives is
/// [`RemoteServiceError::Transport`].
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.daemon_base_url(),
        })
    }

    /// Client pointed at an explicit base URL (tests).
    pub fn with_base_url(base_url: String) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url,
        })
    }

    pub async fn post_json<Req, Resp>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, RemoteServiceError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode(response).await
    }

    pub async fn get_json<Resp>(&self, path_and_query: &str) -> Result<Resp, RemoteServiceError>
    where
        Resp: DeserializeOwned,
    {
        let url = self.url(path_and_query);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;

        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn decode<Resp: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Resp, RemoteServiceError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            };
            return Err(RemoteServiceError::Rejected(message));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|err| RemoteServiceError::Transport(format!("malformed response: {}", err)))
    }
}

fn transport_error(err: reqwest::Error) -> RemoteServiceError {
    RemoteServiceError::Transport(err.to_string())
}
