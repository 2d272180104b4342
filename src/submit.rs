use std::time::Duration;

use crate::error::SubmitError;
use crate::signing;

/// Response from a completed (2xx) submission.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

pub struct Submitter {
    client: reqwest::Client,
    endpoint: String,
}

impl Submitter {
    /// Submitter with the fixed 30-second request timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build reqwest client"),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the canonical bytes, signed with `tag`, to the endpoint. The
    /// body is sent exactly as given — the signed bytes must travel
    /// unmodified. Connection failures and timeouts are fatal; so is any
    /// non-2xx response.
    pub async fn submit(&self, canonical: String, tag: &str) -> Result<Receipt, SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-Signature-256", signing::signature_header(tag))
            .body(canonical)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).to_string(),
                )
            })
            .collect();
        let body = resp.text().await.unwrap_or_default();

        if status >= 200 && status < 300 {
            Ok(Receipt {
                status,
                headers,
                body,
            })
        } else {
            Err(SubmitError::Rejected { status, body })
        }
    }
}
