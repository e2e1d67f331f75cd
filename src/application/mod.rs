//! Application layer - Decision sessions driving the solver port.
//!
//! Each session owns the editable input state for one flow plus the
//! busy/error/result triple a rendering layer observes. Sessions issue
//! exactly one solver request per `compute()` call; failures are terminal
//! for that attempt and never disturb the entered data.

mod ahp_session;
mod combined_session;
mod criteria_session;
mod electre_session;
mod state;

pub use ahp_session::AhpDecisionSession;
pub use combined_session::{CombinedOutcome, CombinedPipelineSession};
pub use criteria_session::CriteriaWeightSession;
pub use electre_session::ElectreDecisionSession;
pub use state::ComputeState;
