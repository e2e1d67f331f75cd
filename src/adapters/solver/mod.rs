//! Solver Adapters.
//!
//! Implementations of the SolverClient port.
//!
//! ## Available Adapters
//!
//! - `HttpSolverClient` - reqwest client for the real solver backend
//! - `MockSolverClient` - Configurable mock for testing

mod http_client;
mod mock_client;

pub use http_client::HttpSolverClient;
pub use mock_client::{MockFailure, MockReply, MockSolverClient, RecordedCall};
