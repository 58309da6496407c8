//! Skeleton estimation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SIGNIFICANCE_LEVEL;

/// How conditioning candidates are drawn within a level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletonVariant {
    /// Neighbour sets reflect removals made earlier in the same level.
    /// Results depend on the pair-processing order.
    #[default]
    Classical,
    /// Neighbour sets are frozen at the start of each level
    /// (order-independent adjacency, "PC-stable").
    Stable,
}

impl SkeletonVariant {
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classical" => Some(Self::Classical),
            "stable" => Some(Self::Stable),
            _ => None,
        }
    }
}

/// Configuration for the skeleton estimator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonConfig {
    /// Threshold α; a p-value above it means "independent". Default: 0.01.
    pub significance_level: Option<f64>,
    /// Largest conditioning-set size to try. Default: unbounded.
    pub max_conditioning_size: Option<usize>,
    /// Default: classical.
    pub variant: SkeletonVariant,
    /// Evaluate one pair's subsets in parallel. Default: false.
    pub parallel_subsets: Option<bool>,
}

impl SkeletonConfig {
    /// Classical configuration at the given threshold.
    pub fn with_significance(significance_level: f64) -> Self {
        Self {
            significance_level: Some(significance_level),
            ..Self::default()
        }
    }

    pub fn effective_significance_level(&self) -> f64 {
        self.significance_level.unwrap_or(DEFAULT_SIGNIFICANCE_LEVEL)
    }

    pub fn effective_parallel_subsets(&self) -> bool {
        self.parallel_subsets.unwrap_or(false)
    }
}
