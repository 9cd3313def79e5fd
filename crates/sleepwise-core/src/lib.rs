//! Domain types, ground-truth labeling and input normalization

mod config;
mod error;
pub mod parse;
mod rule;
mod types;

pub use config::Config;
pub use error::ParseError;
pub use parse::{MenuChoice, SleepDuration};
pub use rule::label_sleep;
pub use types::{Caffeine, FeatureRow, HistoryEntry, LabeledRow, Mood, SleepQuality};
