//! Decision Desk - Client-side data preparation for MCDA solvers.
//!
//! This crate assembles and validates the inputs of two multi-criteria
//! decision analysis methods - AHP and ELECTRE - and dispatches them to an
//! external solver service over HTTP. The numerical work (eigenvector
//! weights, consistency ratios, outranking) happens on the solver side;
//! what lives here are the invariants that keep a reciprocal comparison
//! matrix coherent while it is edited, the assembly of a full AHP
//! hierarchy from incremental per-cell edits, and the weight normalization
//! an ELECTRE request needs before it can be sent.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
