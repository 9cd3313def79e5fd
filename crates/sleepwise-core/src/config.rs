//! Configuration for dataset generation and model training

use serde::{Deserialize, Serialize};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Synthetic rows to generate
    pub rows: usize,

    /// Seed shared by the generator, the split and the forest
    pub seed: u64,

    /// Trees in the forest
    pub n_trees: usize,

    /// Share of rows held out for evaluation (0.0 disables the hold-out)
    pub test_fraction: f64,

    /// Maximum tree depth (None = grow until pure)
    pub max_depth: Option<usize>,

    /// Minimum rows a node needs before it may split
    pub min_samples_split: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            rows: 700,
            seed: 42,
            n_trees: 250,
            test_fraction: 0.2,
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
