//! Shared HTTP client for the completion service.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::CoachError;

/// Thin JSON-over-POST wrapper around reqwest.
///
/// One attempt per call: failures surface to the caller as [`CoachError`]
/// values instead of being retried here. Timeouts are whatever reqwest
/// defaults to.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(user_agent: Option<&str>) -> Result<Self, CoachError> {
        let default_ua = format!("fitcoach/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .user_agent(ua)
            .build()
            .map_err(|e| {
                CoachError::Configuration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body and decode a JSON response.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, CoachError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| CoachError::Network {
            message: "Request to completion service failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CoachError::Api {
                message: format!("API error ({status}): {error_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(|e| CoachError::Parse {
            message: "Failed to read response body".to_string(),
            source: Some(Box::new(e)),
        })?;

        serde_json::from_str(&response_text).map_err(|e| CoachError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Some(Box::new(e)),
        })
    }
}
