//! Trait seams for external collaborators.

pub mod independence;

pub use independence::IndependenceTest;
