//! HTTP Solver Client - reqwest implementation of the SolverClient port.
//!
//! Talks JSON to the solver backend. Error mapping follows the contract the
//! result panel depends on: a body with an `error` field becomes the
//! displayed message verbatim, any other non-2xx becomes the templated
//! status message, and transport failures name the configured backend
//! address so the user knows which server to start.
//!
//! # Configuration
//!
//! ```ignore
//! let config = SolverConfig::default().with_base_url("http://localhost:5000");
//! let client = HttpSolverClient::new(&config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::ports::{
    AhpFullRequest, AhpFullResponse, AhpWeightsRequest, AhpWeightsResponse, CombinedRequest,
    CombinedResponse, ElectreRankRequest, ElectreRankResponse, SolverClient, SolverError,
};

/// Error body shape the solver uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// reqwest-backed solver client.
pub struct HttpSolverClient {
    base_url: String,
    client: Client,
}

impl HttpSolverClient {
    /// Creates a client against the configured backend.
    pub fn new(config: &SolverConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The backend address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts a JSON body and decodes a JSON response.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, SolverError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(path, "dispatching solver request");

        let response = self
            .client
            .post(self.endpoint(path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "solver request failed in transport");
                SolverError::unreachable(&self.base_url)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.rejection(status.as_u16(), &text));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| SolverError::invalid_response(e.to_string()))
    }

    /// Maps a non-2xx body to the displayed error.
    fn rejection(&self, status: u16, body: &str) -> SolverError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error: Some(message),
            }) => SolverError::rejected(status, message),
            _ => SolverError::status(status, &self.base_url),
        }
    }
}

#[async_trait]
impl SolverClient for HttpSolverClient {
    async fn ahp_weights(
        &self,
        request: AhpWeightsRequest,
    ) -> Result<AhpWeightsResponse, SolverError> {
        self.post("/api/ahp/weights", &request).await
    }

    async fn ahp_full(&self, request: AhpFullRequest) -> Result<AhpFullResponse, SolverError> {
        self.post("/api/ahp/full", &request).await
    }

    async fn electre_rank(
        &self,
        request: ElectreRankRequest,
    ) -> Result<ElectreRankResponse, SolverError> {
        self.post("/api/electre/rank", &request).await
    }

    async fn combined(&self, request: CombinedRequest) -> Result<CombinedResponse, SolverError> {
        self.post("/api/combined", &request).await
    }
}
