//! Classifier trait and a bagged random forest

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use sleepwise_core::Config;

use crate::error::LearnError;
use crate::tree::{DecisionTree, TreeParams};

/// Supervised classifier over numeric feature rows and integer class codes
pub trait Classifier {
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<(), LearnError>;

    /// Probability per class code
    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, LearnError>;

    fn predict(&self, row: &[f64]) -> Result<usize, LearnError> {
        Ok(argmax(&self.predict_proba(row)?))
    }
}

/// Index of the largest value; ties go to the lowest index
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub seed: u64,
}

impl ForestParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            n_trees: config.n_trees,
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            seed: config.seed,
        }
    }
}

/// Bootstrap-aggregated CART trees; predictions average leaf distributions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    params: ForestParams,
    trees: Vec<DecisionTree>,
    n_features: usize,
    n_classes: usize,
}

impl RandomForest {
    pub fn new(params: ForestParams) -> Self {
        Self {
            params,
            trees: Vec::new(),
            n_features: 0,
            n_classes: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ForestParams::from_config(config))
    }

    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}

impl Classifier for RandomForest {
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<(), LearnError> {
        if x.is_empty() {
            return Err(LearnError::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(LearnError::LengthMismatch {
                features: x.len(),
                labels: y.len(),
            });
        }
        if self.params.n_trees == 0 {
            return Err(LearnError::InvalidConfig(
                "forest needs at least one tree".to_string(),
            ));
        }
        let n_features = x[0].len();
        if let Some(bad) = x.iter().find(|row| row.len() != n_features) {
            return Err(LearnError::FeatureCount {
                expected: n_features,
                actual: bad.len(),
            });
        }

        let n_classes = y.iter().copied().max().map_or(0, |m| m + 1);
        let tree_params = TreeParams {
            max_depth: self.params.max_depth,
            min_samples_split: self.params.min_samples_split,
            max_features: ((n_features as f64).sqrt() as usize).max(1),
        };

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let n = x.len();
        self.trees = (0..self.params.n_trees)
            .map(|_| {
                let mut tree_rng = StdRng::seed_from_u64(rng.gen());
                let sample: Vec<usize> = (0..n).map(|_| tree_rng.gen_range(0..n)).collect();
                DecisionTree::fit(x, y, sample, n_classes, tree_params, &mut tree_rng)
            })
            .collect();
        self.n_features = n_features;
        self.n_classes = n_classes;

        tracing::debug!(
            trees = self.trees.len(),
            rows = n,
            features = n_features,
            classes = n_classes,
            "random forest fitted"
        );
        Ok(())
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, LearnError> {
        if !self.is_fitted() {
            return Err(LearnError::NotFitted);
        }
        if row.len() != self.n_features {
            return Err(LearnError::FeatureCount {
                expected: self.n_features,
                actual: row.len(),
            });
        }

        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.predict_proba(row)) {
                *acc += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        Ok(proba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n_trees: usize) -> ForestParams {
        ForestParams {
            n_trees,
            max_depth: None,
            min_samples_split: 2,
            seed: 42,
        }
    }

    fn blobs() -> (Vec<Vec<f64>>, Vec<usize>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for i in 0..30 {
            let jitter = (i % 5) as f64 * 0.1;
            x.push(vec![1.0 + jitter, 1.0 - jitter]);
            y.push(0);
            x.push(vec![5.0 + jitter, 5.0 - jitter]);
            y.push(1);
            x.push(vec![9.0 + jitter, 1.0 + jitter]);
            y.push(2);
        }
        (x, y)
    }

    #[test]
    fn test_argmax_ties_lowest() {
        assert_eq!(argmax(&[0.2, 0.5, 0.3]), 1);
        assert_eq!(argmax(&[0.4, 0.4, 0.2]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn test_separates_blobs() {
        let (x, y) = blobs();
        let mut forest = RandomForest::new(params(20));
        forest.fit(&x, &y).unwrap();
        assert_eq!(forest.trees().len(), 20);
        assert_eq!(forest.n_classes(), 3);
        assert_eq!(forest.predict(&[1.1, 0.9]).unwrap(), 0);
        assert_eq!(forest.predict(&[5.1, 4.9]).unwrap(), 1);
        assert_eq!(forest.predict(&[9.2, 1.2]).unwrap(), 2);

        let proba = forest.predict_proba(&[5.0, 5.0]).unwrap();
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_forest() {
        let (x, y) = blobs();
        let mut a = RandomForest::new(params(5));
        let mut b = RandomForest::new(params(5));
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.trees(), b.trees());
    }

    #[test]
    fn test_fit_errors() {
        let mut forest = RandomForest::new(params(3));
        assert!(matches!(forest.fit(&[], &[]), Err(LearnError::EmptyDataset)));
        assert!(matches!(
            forest.fit(&[vec![1.0]], &[0, 1]),
            Err(LearnError::LengthMismatch { .. })
        ));
        assert!(matches!(
            forest.fit(&[vec![1.0], vec![1.0, 2.0]], &[0, 1]),
            Err(LearnError::FeatureCount { .. })
        ));

        let mut empty = RandomForest::new(params(0));
        assert!(matches!(
            empty.fit(&[vec![1.0]], &[0]),
            Err(LearnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_predict_requires_fit() {
        let forest = RandomForest::new(params(3));
        assert!(matches!(
            forest.predict(&[1.0, 2.0]),
            Err(LearnError::NotFitted)
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let (x, y) = blobs();
        let mut forest = RandomForest::new(params(3));
        forest.fit(&x, &y).unwrap();
        let json = serde_json::to_string(&forest).unwrap();
        let loaded: RandomForest = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.trees().len(), 3);
        assert_eq!(loaded.predict(&[1.0, 1.0]).unwrap(), 0);
    }
}
