//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SolverClient` - Port for the external MCDA solver service

mod solver_client;

pub use solver_client::{
    AhpFullRequest, AhpFullResponse, AhpFullResult, AhpWeightsRequest, AhpWeightsResponse,
    AhpWeightsResult, CombinedRequest, CombinedResponse, ElectreRankRequest, ElectreRankResponse,
    ElectreRankResult, SolverClient, SolverError,
};
