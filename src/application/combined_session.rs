//! Combined pipeline session - AHP weighing piped into ELECTRE ranking.
//!
//! One pairwise criteria matrix plus one performance grid; the solver runs
//! both stages server-side and returns the intermediate weights alongside
//! the final ranking.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::comparison::{MatrixAssembler, ReciprocalMatrix};
use crate::domain::electre::PerformanceGrid;
use crate::domain::foundation::GroupSize;
use crate::ports::{
    AhpWeightsResult, CombinedRequest, CombinedResponse, ElectreRankResult, SolverClient,
};

use super::ComputeState;

/// Outcome of the combined pipeline: both stages' results.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedOutcome {
    pub ahp: AhpWeightsResult,
    pub electre: ElectreRankResult,
}

impl From<CombinedResponse> for CombinedOutcome {
    fn from(response: CombinedResponse) -> Self {
        Self {
            ahp: response.ahp,
            electre: response.electre,
        }
    }
}

/// Editable combined AHP-then-ELECTRE flow.
#[derive(Debug)]
pub struct CombinedPipelineSession {
    criteria: ReciprocalMatrix,
    performance: PerformanceGrid,
    state: ComputeState<CombinedOutcome>,
}

impl CombinedPipelineSession {
    /// Creates a session for `criteria` columns over `options` rows.
    pub fn new(criteria: GroupSize, options: GroupSize) -> Self {
        Self {
            criteria: ReciprocalMatrix::new(criteria.as_usize()),
            performance: PerformanceGrid::new(options.as_usize(), criteria.as_usize()),
            state: ComputeState::new(),
        }
    }

    /// Mutable access to the criteria comparison matrix.
    pub fn criteria_mut(&mut self) -> &mut ReciprocalMatrix {
        &mut self.criteria
    }

    /// Mutable access to the performance grid.
    pub fn performance_mut(&mut self) -> &mut PerformanceGrid {
        &mut self.performance
    }

    /// True while a compute attempt is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Error panel text from the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Latest pipeline outcome, if the last attempt succeeded.
    pub fn result(&self) -> Option<&CombinedOutcome> {
        self.state.result()
    }

    /// Densifies both inputs and submits the pipeline request.
    pub async fn compute(&mut self, solver: &dyn SolverClient) {
        self.state.begin();

        let request = CombinedRequest {
            pairwise_matrix: MatrixAssembler::densify(&self.criteria),
            performance_matrix: self.performance.to_dense(),
        };

        let request_id = Uuid::new_v4();
        debug!(%request_id, "submitting combined AHP-ELECTRE pipeline");

        match solver.combined(request).await {
            Ok(response) => {
                debug!(%request_id, "combined pipeline computed");
                self.state.succeed(response.into());
            }
            Err(err) => {
                warn!(%request_id, error = %err, "combined pipeline failed");
                self.state.fail(err.to_string());
            }
        }
    }
}
