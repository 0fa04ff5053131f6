//! reqwest-backed gateway for the Advice Slip API.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::gateway::{AdviceGateway, FetchFuture, GatewayError};
use crate::record::AdviceRecord;

const DEFAULT_ENDPOINT: &str = "https://api.adviceslip.com/advice";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of the endpoint: `{"slip": {"id": <int>, "advice": "<str>"}}`.
/// Anything else is a parse failure; a record is never half-populated.
#[derive(Debug, Deserialize)]
struct SlipEnvelope {
    slip: Slip,
}

#[derive(Debug, Deserialize)]
struct Slip {
    id: u64,
    advice: String,
}

pub struct HttpAdviceGateway {
    client: Client,
    endpoint: String,
}

impl HttpAdviceGateway {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the gateway at a different origin serving the same wire shape.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build advice client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self) -> Result<AdviceRecord, GatewayError> {
        debug!(endpoint = %self.endpoint, "requesting advice");

        // The slip endpoint sits behind caches that replay the same slip;
        // each call has to reach the origin.
        let response = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::new(format!("unexpected status {status}")));
        }

        let body = response.text().await?;
        let envelope: SlipEnvelope = serde_json::from_str(&body)
            .map_err(|err| GatewayError::new(format!("malformed body: {err}")))?;

        if envelope.slip.advice.is_empty() {
            return Err(GatewayError::new("empty advice text"));
        }

        Ok(AdviceRecord {
            id: envelope.slip.id,
            text: envelope.slip.advice,
        })
    }
}

impl AdviceGateway for HttpAdviceGateway {
    fn fetch_advice(&self) -> FetchFuture<'_> {
        Box::pin(self.fetch())
    }
}

impl Default for HttpAdviceGateway {
    fn default() -> Self {
        Self::new()
    }
}
