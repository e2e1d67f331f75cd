//! Criteria weighing session - single-matrix AHP flow.
//!
//! The lightweight flow for deriving criteria weights alone: one pairwise
//! matrix in, weights plus the solver's consistency verdict out.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::comparison::{MatrixAssembler, ReciprocalMatrix};
use crate::domain::foundation::GroupSize;
use crate::ports::{AhpWeightsRequest, AhpWeightsResult, SolverClient};

use super::ComputeState;

/// Editable single-matrix AHP flow.
#[derive(Debug)]
pub struct CriteriaWeightSession {
    matrix: ReciprocalMatrix,
    state: ComputeState<AhpWeightsResult>,
}

impl CriteriaWeightSession {
    /// Creates a session for `criteria` pairwise comparisons.
    pub fn new(criteria: GroupSize) -> Self {
        Self {
            matrix: ReciprocalMatrix::new(criteria.as_usize()),
            state: ComputeState::new(),
        }
    }

    /// Read access to the matrix under edit.
    pub fn matrix(&self) -> &ReciprocalMatrix {
        &self.matrix
    }

    /// Mutable access for routing cell edits.
    pub fn matrix_mut(&mut self) -> &mut ReciprocalMatrix {
        &mut self.matrix
    }

    /// True while a compute attempt is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Error panel text from the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Latest solver result, if the last attempt succeeded.
    pub fn result(&self) -> Option<&AhpWeightsResult> {
        self.state.result()
    }

    /// Densifies the matrix and submits it for weighing.
    pub async fn compute(&mut self, solver: &dyn SolverClient) {
        self.state.begin();

        let request = AhpWeightsRequest {
            matrix: MatrixAssembler::densify(&self.matrix),
        };

        let request_id = Uuid::new_v4();
        debug!(%request_id, size = self.matrix.size(), "submitting criteria matrix for weighing");

        match solver.ahp_weights(request).await {
            Ok(response) => {
                debug!(%request_id, consistent = response.result.is_consistent, "criteria weights computed");
                self.state.succeed(response.result);
            }
            Err(err) => {
                warn!(%request_id, error = %err, "criteria weighing failed");
                self.state.fail(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockReply, MockSolverClient, RecordedCall};

    #[tokio::test]
    async fn compute_densifies_the_entered_matrix() {
        let solver = MockSolverClient::new();
        let mut session = CriteriaWeightSession::new(GroupSize::try_new(2).unwrap());
        session.matrix_mut().enter(0, 1, "2");

        session.compute(&solver).await;

        match &solver.calls()[0] {
            RecordedCall::AhpWeights(request) => {
                assert_eq!(request.matrix, vec![vec![1.0, 2.0], vec![0.5, 1.0]]);
            }
            other => panic!("Expected AhpWeights call, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn compute_installs_weights_and_consistency_verdict() {
        let result = AhpWeightsResult {
            weights: vec![0.6667, 0.3333],
            consistency_ratio: 0.0,
            is_consistent: true,
        };
        let solver = MockSolverClient::new().with_reply(MockReply::AhpWeights(result.clone()));
        let mut session = CriteriaWeightSession::new(GroupSize::try_new(2).unwrap());

        session.compute(&solver).await;

        assert_eq!(session.result(), Some(&result));
        assert!(!session.is_busy());
    }
}
