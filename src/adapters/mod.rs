//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `solver` - Solver backend clients (HTTP, mock)

pub mod solver;

pub use solver::{HttpSolverClient, MockFailure, MockReply, MockSolverClient, RecordedCall};
