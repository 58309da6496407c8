//! Configuration for PC discovery.
//! TOML-based, resolved as: env > file > compiled defaults.

pub mod orientation_config;
pub mod pc_config;
pub mod skeleton_config;

pub use orientation_config::{ConflictPolicy, OrientationConfig};
pub use pc_config::PcConfig;
pub use skeleton_config::{SkeletonConfig, SkeletonVariant};
