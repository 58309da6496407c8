//! Data model shared by skeleton estimation and orientation.

pub mod cpdag;
pub mod pair;
pub mod sample;
pub mod separation;
pub mod skeleton;
pub mod undirected;

pub use cpdag::{Cpdag, OrientOutcome, PairEdge};
pub use pair::{VarId, VarPair};
pub use sample::SampleMatrix;
pub use separation::{SeparationEntry, SeparationSets};
pub use skeleton::Skeleton;
pub use undirected::UndirectedGraph;
