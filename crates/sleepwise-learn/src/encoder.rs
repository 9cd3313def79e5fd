//! Categorical encoding between label strings and integer codes
//!
//! Codes follow lexicographic order of the fitted values, so the meaning of
//! each integer does not depend on which category the generator happened to
//! produce first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use sleepwise_core::{Caffeine, FeatureRow, LabeledRow, Mood, SleepQuality};

use crate::error::EncodeError;

/// Classifier input columns, in order
pub const FEATURE_NAMES: [&str; 9] = [
    "sleep_duration",
    "bedtime",
    "wake_time",
    "caffeine",
    "exercise",
    "screen_time",
    "stress",
    "mood",
    "interruptions",
];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Bijection between one column's category names and codes `0..len`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    column: String,
    classes: Vec<String>,
}

impl CategoricalEncoder {
    pub fn fit<I, S>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();
        Self {
            column: column.to_string(),
            classes: distinct.into_iter().collect(),
        }
    }

    pub fn encode(&self, value: &str) -> Result<usize, EncodeError> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .map_err(|_| EncodeError::UnknownCategory {
                column: self.column.clone(),
                value: value.to_string(),
            })
    }

    pub fn decode(&self, code: usize) -> Result<&str, EncodeError> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| EncodeError::UnknownCode {
                column: self.column.clone(),
                code,
            })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Encoders for every categorical column, fitted once on the training table.
///
/// Caffeine and mood vocabularies always hold every menu value, so any answer
/// the console accepts encodes even when a small table never produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingTable {
    pub caffeine: CategoricalEncoder,
    pub mood: CategoricalEncoder,
    pub sleep_quality: CategoricalEncoder,
}

impl EncodingTable {
    pub fn fit(rows: &[LabeledRow]) -> Self {
        Self {
            caffeine: CategoricalEncoder::fit(
                "caffeine",
                Caffeine::ALL
                    .iter()
                    .chain(rows.iter().map(|r| &r.features.caffeine))
                    .map(|c| c.as_str()),
            ),
            mood: CategoricalEncoder::fit(
                "mood",
                Mood::ALL
                    .iter()
                    .chain(rows.iter().map(|r| &r.features.mood))
                    .map(|m| m.as_str()),
            ),
            sleep_quality: CategoricalEncoder::fit(
                "sleep_quality",
                rows.iter().map(|r| r.sleep_quality.as_str()),
            ),
        }
    }

    /// Feature vector in [`FEATURE_NAMES`] order
    pub fn encode_row(&self, row: &FeatureRow) -> Result<Vec<f64>, EncodeError> {
        Ok(vec![
            row.sleep_duration,
            f64::from(row.bedtime),
            f64::from(row.wake_time),
            self.caffeine.encode(row.caffeine.as_str())? as f64,
            f64::from(row.exercise),
            f64::from(row.screen_time),
            f64::from(row.stress),
            self.mood.encode(row.mood.as_str())? as f64,
            f64::from(row.interruptions),
        ])
    }

    pub fn encode_label(&self, quality: SleepQuality) -> Result<usize, EncodeError> {
        self.sleep_quality.encode(quality.as_str())
    }

    pub fn decode_label(&self, code: usize) -> Result<SleepQuality, EncodeError> {
        let name = self.sleep_quality.decode(code)?;
        name.parse().map_err(|_| EncodeError::UnknownCode {
            column: self.sleep_quality.column().to_string(),
            code,
        })
    }

    /// Features and label codes for a labeled table
    pub fn encode_rows(
        &self,
        rows: &[LabeledRow],
    ) -> Result<(Vec<Vec<f64>>, Vec<usize>), EncodeError> {
        let mut features = Vec::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        for row in rows {
            features.push(self.encode_row(&row.features)?);
            labels.push(self.encode_label(row.sleep_quality)?);
        }
        Ok((features, labels))
    }
}
