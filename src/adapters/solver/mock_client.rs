//! Mock Solver Client for testing.
//!
//! Configurable mock implementation of the SolverClient port, allowing
//! orchestration tests to run without a solver backend.
//!
//! # Features
//!
//! - Queued replies consumed in order
//! - Error injection for failure-path testing
//! - Call recording for verification
//! - Simulated latency for busy-flag observation
//!
//! # Example
//!
//! ```ignore
//! let solver = MockSolverClient::new()
//!     .with_reply(MockReply::AhpFull(my_result))
//!     .with_failure(MockFailure::Rejected { status: 500, message: "bad matrix".into() });
//! ```

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AhpFullRequest, AhpFullResponse, AhpFullResult, AhpWeightsRequest, AhpWeightsResponse,
    AhpWeightsResult, CombinedRequest, CombinedResponse, ElectreRankRequest, ElectreRankResponse,
    ElectreRankResult, SolverClient, SolverError,
};

/// A configured mock reply, matched against the endpoint being called.
#[derive(Debug, Clone)]
pub enum MockReply {
    AhpWeights(AhpWeightsResult),
    AhpFull(AhpFullResult),
    ElectreRank(ElectreRankResult),
    Combined {
        ahp: AhpWeightsResult,
        electre: ElectreRankResult,
    },
    Failure(MockFailure),
}

/// Mock failure kinds, mirroring the SolverError variants.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Unreachable { base_url: String },
    Rejected { status: u16, message: String },
    Status { status: u16, base_url: String },
    InvalidResponse { message: String },
}

impl From<MockFailure> for SolverError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Unreachable { base_url } => SolverError::unreachable(base_url),
            MockFailure::Rejected { status, message } => SolverError::rejected(status, message),
            MockFailure::Status { status, base_url } => SolverError::status(status, base_url),
            MockFailure::InvalidResponse { message } => SolverError::invalid_response(message),
        }
    }
}

/// A recorded request, for verification in tests.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    AhpWeights(AhpWeightsRequest),
    AhpFull(AhpFullRequest),
    ElectreRank(ElectreRankRequest),
    Combined(CombinedRequest),
}

/// Mock solver for testing.
///
/// Replies are consumed front-to-back. A queued reply that does not match
/// the endpoint being called is left in place and a zeroed default result is
/// returned instead, so tests only script what they care about.
#[derive(Debug, Clone, Default)]
pub struct MockSolverClient {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    delay: Duration,
}

impl MockSolverClient {
    /// Creates an empty mock that answers every call with zeroed defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply.
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.with_reply(MockReply::Failure(failure))
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn begin(&self, call: RecordedCall) -> Result<Option<MockReply>, SolverError> {
        self.calls.lock().unwrap().push(call);
        if self.delay > Duration::ZERO {
            sleep(self.delay).await;
        }
        let mut replies = self.replies.lock().unwrap();
        if matches!(replies.front(), Some(MockReply::Failure(_))) {
            if let Some(MockReply::Failure(failure)) = replies.pop_front() {
                return Err(failure.into());
            }
        }
        // Mismatched replies stay queued for the endpoint they target.
        Ok(replies.front().cloned())
    }

    fn take_front(&self) {
        self.replies.lock().unwrap().pop_front();
    }
}

fn uniform(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

#[async_trait]
impl SolverClient for MockSolverClient {
    async fn ahp_weights(
        &self,
        request: AhpWeightsRequest,
    ) -> Result<AhpWeightsResponse, SolverError> {
        let n = request.matrix.len();
        let front = self.begin(RecordedCall::AhpWeights(request)).await?;
        let result = match front {
            Some(MockReply::AhpWeights(result)) => {
                self.take_front();
                result
            }
            _ => AhpWeightsResult {
                weights: uniform(n),
                consistency_ratio: 0.0,
                is_consistent: true,
            },
        };
        Ok(AhpWeightsResponse {
            timestamp: Utc::now(),
            method: "AHP".to_string(),
            result,
        })
    }

    async fn ahp_full(&self, request: AhpFullRequest) -> Result<AhpFullResponse, SolverError> {
        let n = request.criteria_matrix.len();
        let m = request.alt_matrices.first().map_or(0, |mat| mat.len());
        let front = self.begin(RecordedCall::AhpFull(request)).await?;
        let result = match front {
            Some(MockReply::AhpFull(result)) => {
                self.take_front();
                result
            }
            _ => AhpFullResult {
                criteria_weights: uniform(n),
                local_alt_weights: vec![uniform(m); n],
                global_scores: uniform(m),
                best_alternative: 0,
            },
        };
        Ok(AhpFullResponse {
            timestamp: Utc::now(),
            method: "AHP".to_string(),
            result,
        })
    }

    async fn electre_rank(
        &self,
        request: ElectreRankRequest,
    ) -> Result<ElectreRankResponse, SolverError> {
        let m = request.performance_matrix.len();
        let front = self.begin(RecordedCall::ElectreRank(request)).await?;
        let result = match front {
            Some(MockReply::ElectreRank(result)) => {
                self.take_front();
                result
            }
            _ => ElectreRankResult {
                ranking: (0..m).collect(),
                net_flows: vec![0.0; m],
                concordance_threshold: 0.0,
                discordance_threshold: 0.0,
            },
        };
        Ok(ElectreRankResponse {
            timestamp: Utc::now(),
            method: "ELECTRE".to_string(),
            result,
        })
    }

    async fn combined(&self, request: CombinedRequest) -> Result<CombinedResponse, SolverError> {
        let n = request.pairwise_matrix.len();
        let m = request.performance_matrix.len();
        let front = self.begin(RecordedCall::Combined(request)).await?;
        let (ahp, electre) = match front {
            Some(MockReply::Combined { ahp, electre }) => {
                self.take_front();
                (ahp, electre)
            }
            _ => (
                AhpWeightsResult {
                    weights: uniform(n),
                    consistency_ratio: 0.0,
                    is_consistent: true,
                },
                ElectreRankResult {
                    ranking: (0..m).collect(),
                    net_flows: vec![0.0; m],
                    concordance_threshold: 0.0,
                    discordance_threshold: 0.0,
                },
            ),
        };
        Ok(CombinedResponse {
            timestamp: Utc::now(),
            pipeline: "ahp-electre".to_string(),
            ahp,
            electre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_full_result() -> AhpFullResult {
        AhpFullResult {
            criteria_weights: vec![0.75, 0.25],
            local_alt_weights: vec![vec![0.6, 0.4], vec![0.5, 0.5]],
            global_scores: vec![0.575, 0.425],
            best_alternative: 0,
        }
    }

    fn full_request() -> AhpFullRequest {
        AhpFullRequest {
            criteria_matrix: vec![vec![1.0, 2.0], vec![0.5, 1.0]],
            alt_matrices: vec![
                vec![vec![1.0, 3.0], vec![0.3333, 1.0]],
                vec![vec![1.0, 1.0], vec![1.0, 1.0]],
            ],
        }
    }

    #[tokio::test]
    async fn queued_reply_is_returned_and_consumed() {
        let solver = MockSolverClient::new().with_reply(MockReply::AhpFull(sample_full_result()));

        let response = solver.ahp_full(full_request()).await.unwrap();
        assert_eq!(response.result, sample_full_result());

        // Queue drained: next call falls back to the default.
        let response = solver.ahp_full(full_request()).await.unwrap();
        assert_eq!(response.result.criteria_weights, vec![0.5, 0.5]);
    }

    #[tokio::test]
    async fn queued_failure_is_returned_for_any_endpoint() {
        let solver = MockSolverClient::new().with_failure(MockFailure::Rejected {
            status: 500,
            message: "bad matrix".to_string(),
        });

        let err = solver.ahp_full(full_request()).await.unwrap_err();
        assert_eq!(err.to_string(), "bad matrix");
    }

    #[tokio::test]
    async fn mismatched_reply_stays_queued() {
        let solver =
            MockSolverClient::new().with_reply(MockReply::ElectreRank(ElectreRankResult {
                ranking: vec![1, 0],
                net_flows: vec![-0.1, 0.1],
                concordance_threshold: 0.6,
                discordance_threshold: 0.4,
            }));

        // AHP call gets a default, leaving the ELECTRE reply in place.
        solver.ahp_full(full_request()).await.unwrap();

        let request = ElectreRankRequest {
            weights: vec![0.5, 0.5],
            performance_matrix: vec![vec![1.0, 2.0], vec![2.0, 1.0]],
            thresholds: None,
        };
        let response = solver.electre_rank(request).await.unwrap();
        assert_eq!(response.result.ranking, vec![1, 0]);
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let solver = MockSolverClient::new();
        assert_eq!(solver.call_count(), 0);

        solver.ahp_full(full_request()).await.unwrap();
        assert_eq!(solver.call_count(), 1);
        assert!(matches!(solver.calls()[0], RecordedCall::AhpFull(_)));
    }

    #[tokio::test]
    async fn delay_is_respected() {
        let solver = MockSolverClient::new().with_delay(Duration::from_millis(30));
        let start = std::time::Instant::now();
        solver.ahp_full(full_request()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
