use crate::errors::{RemoteError, UNKNOWN_REMOTE_ERROR};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// JSON client rooted at `{base_url}/api/`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build HTTP client");
                RemoteError::transport(UNKNOWN_REMOTE_ERROR)
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint);

        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, %url, "API request failed");
                RemoteError::transport(UNKNOWN_REMOTE_ERROR)
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::warn!(error = %e, %url, "failed to read API response body");
            RemoteError::new(Some(status.as_u16()), UNKNOWN_REMOTE_ERROR)
        })?;

        if !status.is_success() {
            tracing::warn!(%status, %url, body = %text, "API error response");
            return Err(RemoteError::new(
                Some(status.as_u16()),
                error_message(status, &text),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, %text, "failed to parse API JSON response");
            RemoteError::new(Some(status.as_u16()), "Invalid response from server")
        })
    }
}

/// Server `message` field, then a plain-text body, then the status reason,
/// then a generic fallback.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(trimmed)
        && !message.trim().is_empty()
    {
        return message;
    }

    if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string())
}
