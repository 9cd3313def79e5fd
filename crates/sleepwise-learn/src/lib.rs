//! Synthetic training data, categorical encoding and the sleep quality classifier

mod dataset;
mod encoder;
mod error;
mod forest;
mod model;
mod tree;

pub use dataset::{generate, train_test_split};
pub use encoder::{CategoricalEncoder, EncodingTable, FEATURE_COUNT};
pub use error::{EncodeError, LearnError};
pub use forest::{argmax, Classifier, ForestParams, RandomForest};
pub use model::{Prediction, SleepModel, TrainingReport};
pub use tree::{DecisionTree, TreeParams};
