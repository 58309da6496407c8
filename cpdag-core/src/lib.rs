//! # cpdag-core
//!
//! Foundation crate for PC structure discovery.
//! Defines the data model, the independence-oracle seam, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PcConfig;
pub use errors::{PcError, PcResult};
pub use models::{
    Cpdag, PairEdge, SampleMatrix, SeparationSets, Skeleton, UndirectedGraph, VarId, VarPair,
};
pub use traits::IndependenceTest;
