//! Reference independence oracles.

pub mod d_separation;

pub use d_separation::DSeparationOracle;
