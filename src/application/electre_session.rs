//! ELECTRE decision session.
//!
//! Owns the worksheet under edit and the compute state next to it. At
//! submit time raw weights are normalized and the sparse performance grid
//! is densified; both are sent in a single ranking request. An all-zero
//! weight vector normalizes to indeterminate values and is forwarded as-is,
//! by design (see the normalizer docs) - the solver's reply is the user's
//! feedback.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::electre::ElectreWorksheet;
use crate::domain::foundation::GroupSize;
use crate::ports::{ElectreRankRequest, ElectreRankResult, SolverClient};

use super::ComputeState;

/// Editable ELECTRE flow: weights, performance entries, optional
/// thresholds, and the latest solver outcome.
#[derive(Debug)]
pub struct ElectreDecisionSession {
    worksheet: ElectreWorksheet,
    thresholds: Option<Vec<f64>>,
    state: ComputeState<ElectreRankResult>,
}

impl ElectreDecisionSession {
    /// Creates a session for the given table sizes.
    pub fn new(criteria: GroupSize, options: GroupSize) -> Self {
        Self {
            worksheet: ElectreWorksheet::new(criteria, options),
            thresholds: None,
            state: ComputeState::new(),
        }
    }

    /// Read access to the worksheet under edit.
    pub fn worksheet(&self) -> &ElectreWorksheet {
        &self.worksheet
    }

    /// Mutable access for routing weight and performance edits.
    pub fn worksheet_mut(&mut self) -> &mut ElectreWorksheet {
        &mut self.worksheet
    }

    /// Overrides the solver's default concordance/discordance thresholds.
    pub fn set_thresholds(&mut self, thresholds: Option<Vec<f64>>) {
        self.thresholds = thresholds;
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
    pub fn result(&self) -> Option<&ElectreRankResult> {
        self.state.result()
    }

    /// Normalizes weights, densifies performance data, and submits.
    ///
    /// Exactly one request per call, no retries; the busy flag settles with
    /// the attempt in all cases.
    pub async fn compute(&mut self, solver: &dyn SolverClient) {
        self.state.begin();

        let request = ElectreRankRequest {
            weights: self.worksheet.normalized_weights(),
            performance_matrix: self.worksheet.performance_matrix(),
            thresholds: self.thresholds.clone(),
        };

        let request_id = Uuid::new_v4();
        debug!(%request_id, options = self.worksheet.option_count(), "submitting ELECTRE ranking request");

        match solver.electre_rank(request).await {
            Ok(response) => {
                debug!(%request_id, "ELECTRE ranking computed");
                self.state.succeed(response.result);
            }
            Err(err) => {
                warn!(%request_id, error = %err, "ELECTRE ranking failed");
                self.state.fail(err.to_string());
            }
        }
    }
}
