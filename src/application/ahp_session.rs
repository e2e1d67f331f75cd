//! Full-AHP decision session.
//!
//! Owns the hierarchy being edited and the compute state rendered next to
//! it. `compute` is the single submit path: it assembles every entered
//! matrix, issues exactly one solver request, and settles the state either
//! with the fresh result or with the error text for the panel. A failed
//! attempt leaves all entered comparisons untouched for correction and
//! resubmission.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::comparison::AhpHierarchy;
use crate::domain::foundation::GroupSize;
use crate::ports::{AhpFullRequest, AhpFullResult, SolverClient};

use super::ComputeState;

/// Editable full-AHP flow: criteria comparisons, per-criterion alternative
/// comparisons, and the latest solver outcome.
#[derive(Debug)]
pub struct AhpDecisionSession {
    hierarchy: AhpHierarchy,
    state: ComputeState<AhpFullResult>,
}

impl AhpDecisionSession {
    /// Creates a session for the given table sizes.
    pub fn new(criteria: GroupSize, alternatives: GroupSize) -> Self {
        Self {
            hierarchy: AhpHierarchy::new(criteria, alternatives),
            state: ComputeState::new(),
        }
    }

    /// Read access to the hierarchy under edit.
    pub fn hierarchy(&self) -> &AhpHierarchy {
        &self.hierarchy
    }

    /// Mutable access for routing cell edits and focus changes.
    pub fn hierarchy_mut(&mut self) -> &mut AhpHierarchy {
        &mut self.hierarchy
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
    pub fn result(&self) -> Option<&AhpFullResult> {
        self.state.result()
    }

    /// Assembles the hierarchy and submits it to the solver.
    ///
    /// Exactly one request per call, no retries. The exclusive borrow makes
    /// a second in-flight compute unrepresentable; the busy flag remains
    /// observable for rendering while this future is suspended.
    pub async fn compute(&mut self, solver: &dyn SolverClient) {
        self.state.begin();

        let assembled = self.hierarchy.assemble();
        let request = AhpFullRequest {
            criteria_matrix: assembled.criteria,
            alt_matrices: assembled.alternatives,
        };

        let request_id = Uuid::new_v4();
        debug!(%request_id, criteria = self.hierarchy.criteria_count(), "submitting full AHP hierarchy");

        match solver.ahp_full(request).await {
            Ok(response) => {
                debug!(%request_id, best = response.result.best_alternative, "full AHP computed");
                self.state.succeed(response.result);
            }
            Err(err) => {
                warn!(%request_id, error = %err, "full AHP computation failed");
                self.state.fail(err.to_string());
            }
        }
    }
}
