//! Solver Client Port - Interface to the external MCDA solver service.
//!
//! The solver owns all numerical work: AHP eigenvector weights, consistency
//! ratios, ELECTRE concordance/discordance ranking. This port carries fully
//! assembled payloads over and typed results back; field names match the
//! solver's JSON contract exactly and must not be renamed.
//!
//! # Design
//!
//! - One method per solver endpoint, all request/response
//! - No retries and no cancellation: every failure is terminal for that
//!   attempt and the caller decides whether to resubmit
//! - Error Display strings are user-facing; the orchestrator shows them
//!   verbatim in its error panel

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::comparison::DenseMatrix;

/// Port for the external MCDA solver.
///
/// Implementations reach a solver backend (HTTP in production, scripted in
/// tests) and translate between the wire contract and these types.
#[async_trait]
pub trait SolverClient: Send + Sync {
    /// `POST /api/ahp/weights` - single-matrix AHP criteria weighing.
    async fn ahp_weights(&self, request: AhpWeightsRequest)
        -> Result<AhpWeightsResponse, SolverError>;

    /// `POST /api/ahp/full` - full hierarchy: criteria plus per-criterion
    /// alternative comparisons.
    async fn ahp_full(&self, request: AhpFullRequest) -> Result<AhpFullResponse, SolverError>;

    /// `POST /api/electre/rank` - ELECTRE outranking over weighted
    /// performance data.
    async fn electre_rank(
        &self,
        request: ElectreRankRequest,
    ) -> Result<ElectreRankResponse, SolverError>;

    /// `POST /api/combined` - AHP weighing piped into ELECTRE ranking.
    async fn combined(&self, request: CombinedRequest) -> Result<CombinedResponse, SolverError>;
}

/// Request body for `/api/ahp/weights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpWeightsRequest {
    pub matrix: DenseMatrix,
}

/// Request body for `/api/ahp/full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpFullRequest {
    pub criteria_matrix: DenseMatrix,
    pub alt_matrices: Vec<DenseMatrix>,
}

/// Request body for `/api/electre/rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectreRankRequest {
    pub weights: Vec<f64>,
    pub performance_matrix: DenseMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<f64>>,
}

/// Request body for `/api/combined`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRequest {
    pub pairwise_matrix: DenseMatrix,
    pub performance_matrix: DenseMatrix,
}

/// Response envelope for `/api/ahp/weights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpWeightsResponse {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub result: AhpWeightsResult,
}

/// Criteria weights with the solver's consistency verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpWeightsResult {
    pub weights: Vec<f64>,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

/// Response envelope for `/api/ahp/full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpFullResponse {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub result: AhpFullResult,
}

/// Full-hierarchy AHP outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpFullResult {
    pub criteria_weights: Vec<f64>,
    pub local_alt_weights: Vec<Vec<f64>>,
    pub global_scores: Vec<f64>,
    pub best_alternative: usize,
}

/// Response envelope for `/api/electre/rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectreRankResponse {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub result: ElectreRankResult,
}

/// ELECTRE outranking outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectreRankResult {
    pub ranking: Vec<usize>,
    pub net_flows: Vec<f64>,
    pub concordance_threshold: f64,
    pub discordance_threshold: f64,
}

/// Response envelope for `/api/combined`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedResponse {
    pub timestamp: DateTime<Utc>,
    pub pipeline: String,
    pub ahp: AhpWeightsResult,
    pub electre: ElectreRankResult,
}

/// Solver errors, with user-facing Display strings.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Transport-level failure: the backend host could not be reached.
    #[error("Network error: Cannot connect to backend server at {base_url}. Please make sure the server is running.")]
    Unreachable {
        /// The configured backend address.
        base_url: String,
    },

    /// The solver rejected the request and said why (`error` field in the
    /// response body); the message is displayed verbatim.
    #[error("{message}")]
    Rejected {
        /// HTTP status of the rejection.
        status: u16,
        /// Message from the response body.
        message: String,
    },

    /// Non-2xx response without a usable error body.
    #[error("Server error ({status}). Make sure the backend server is running on {base_url}")]
    Status {
        /// HTTP status received.
        status: u16,
        /// The configured backend address.
        base_url: String,
    },

    /// A 2xx response whose body did not decode into the expected shape.
    #[error("Invalid response from solver: {0}")]
    InvalidResponse(String),
}

impl SolverError {
    /// Creates a transport-failure error naming the backend address.
    pub fn unreachable(base_url: impl Into<String>) -> Self {
        Self::Unreachable {
            base_url: base_url.into(),
        }
    }

    /// Creates an application-rejection error carrying the body message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates a bare-status error for responses without an error body.
    pub fn status(status: u16, base_url: impl Into<String>) -> Self {
        Self::Status {
            status,
            base_url: base_url.into(),
        }
    }

    /// Creates a malformed-body error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns true for transport-level failures (no response received).
    pub fn is_transport(&self) -> bool {
        matches!(self, SolverError::Unreachable { .. })
    }
}
