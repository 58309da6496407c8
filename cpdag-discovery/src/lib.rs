//! # cpdag-discovery
//!
//! PC structure discovery over a fixed set of observed variables.
//!
//! 1. [`estimate_skeleton`] prunes the complete undirected graph with a
//!    pluggable conditional-independence oracle and records separation sets.
//! 2. [`estimate_cpdag`] orients unshielded colliders and propagates Meek
//!    rules 1–3, producing the CPDAG of the Markov-equivalence class.
//!
//! [`PcEngine`] runs both with a [`PcConfig`](cpdag_core::PcConfig).

pub mod engine;
pub mod graph;
pub mod oracle;
pub mod orientation;
pub mod skeleton;

pub use engine::{PcEngine, PcOutput};
pub use oracle::DSeparationOracle;
pub use orientation::{estimate_cpdag, OrientationEngine, OrientationStats};
pub use skeleton::{estimate_skeleton, SkeletonEstimator, SkeletonStats};
