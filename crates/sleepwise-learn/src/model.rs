//! Training pipeline and prediction entry point

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use sleepwise_core::{Config, FeatureRow, LabeledRow, SleepQuality};

use crate::dataset::{generate, train_test_split};
use crate::encoder::EncodingTable;
use crate::error::LearnError;
use crate::forest::{argmax, Classifier, RandomForest};

/// A decoded prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub quality: SleepQuality,
    /// Classifier probability for `quality`
    pub confidence: f64,
}

/// Summary of one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub seed: u64,
    pub n_trees: usize,
    pub label_counts: BTreeMap<String, usize>,
    /// Hold-out accuracy; absent when nothing was held out
    pub accuracy: Option<f64>,
}

/// Fitted encoder table plus classifier
pub struct SleepModel {
    table: EncodingTable,
    classifier: Box<dyn Classifier>,
}

impl SleepModel {
    /// Wrap an already fitted classifier
    pub fn new(table: EncodingTable, classifier: Box<dyn Classifier>) -> Self {
        Self { table, classifier }
    }

    /// Generate the synthetic table, split it, fit a forest and score it
    pub fn train(config: &Config) -> Result<(Self, TrainingReport), LearnError> {
        validate(config)?;

        let rows = generate(config.rows, config.seed);
        let table = EncodingTable::fit(&rows);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let (train, test) = train_test_split(&rows, config.test_fraction, &mut rng);
        let (x, y) = table.encode_rows(&train)?;

        let mut forest = RandomForest::from_config(config);
        forest.fit(&x, &y)?;
        let model = Self::new(table, Box::new(forest));

        let accuracy = if test.is_empty() {
            None
        } else {
            Some(model.accuracy(&test)?)
        };

        let mut label_counts = BTreeMap::new();
        for row in &rows {
            *label_counts
                .entry(row.sleep_quality.as_str().to_string())
                .or_insert(0) += 1;
        }

        let report = TrainingReport {
            rows: rows.len(),
            train_rows: train.len(),
            test_rows: test.len(),
            seed: config.seed,
            n_trees: config.n_trees,
            label_counts,
            accuracy,
        };
        tracing::info!(
            rows = report.rows,
            train_rows = report.train_rows,
            test_rows = report.test_rows,
            trees = report.n_trees,
            accuracy = report.accuracy,
            "sleep model trained"
        );
        Ok((model, report))
    }

    pub fn predict(&self, row: &FeatureRow) -> Result<Prediction, LearnError> {
        let features = self.table.encode_row(row)?;
        let proba = self.classifier.predict_proba(&features)?;
        let code = argmax(&proba);
        let quality = self.table.decode_label(code)?;
        Ok(Prediction {
            quality,
            confidence: proba.get(code).copied().unwrap_or(0.0),
        })
    }

    /// Share of `rows` whose predicted label matches the ground truth
    pub fn accuracy(&self, rows: &[LabeledRow]) -> Result<f64, LearnError> {
        if rows.is_empty() {
            return Err(LearnError::EmptyDataset);
        }
        let mut correct = 0usize;
        for row in rows {
            if self.predict(&row.features)?.quality == row.sleep_quality {
                correct += 1;
            }
        }
        Ok(correct as f64 / rows.len() as f64)
    }

    pub fn encoding(&self) -> &EncodingTable {
        &self.table
    }
}

fn validate(config: &Config) -> Result<(), LearnError> {
    if config.rows == 0 {
        return Err(LearnError::InvalidConfig("rows must be positive".to_string()));
    }
    if config.n_trees == 0 {
        return Err(LearnError::InvalidConfig(
            "n_trees must be positive".to_string(),
        ));
    }
    if !(0.0..1.0).contains(&config.test_fraction) {
        return Err(LearnError::InvalidConfig(format!(
            "test_fraction must be in [0, 1), got {}",
            config.test_fraction
        )));
    }
    Ok(())
}
