//! Core types for sleep quality prediction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Caffeine intake over the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Caffeine {
    None,
    Low,
    Moderate,
    High,
}

impl Caffeine {
    pub const ALL: [Caffeine; 4] = [
        Caffeine::None,
        Caffeine::Low,
        Caffeine::Moderate,
        Caffeine::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Caffeine::None => "None",
            Caffeine::Low => "Low",
            Caffeine::Moderate => "Moderate",
            Caffeine::High => "High",
        }
    }
}

/// Mood right before going to bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Neutral, Mood::Sad, Mood::Anxious];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
        }
    }
}

/// Predicted (or rule-assigned) sleep quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepQuality {
    Good,
    Average,
    Poor,
}

impl SleepQuality {
    pub const ALL: [SleepQuality; 3] = [
        SleepQuality::Good,
        SleepQuality::Average,
        SleepQuality::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepQuality::Good => "Good",
            SleepQuality::Average => "Average",
            SleepQuality::Poor => "Poor",
        }
    }

    /// Chart level: Poor=1, Average=2, Good=3
    pub fn level(&self) -> u8 {
        match self {
            SleepQuality::Poor => 1,
            SleepQuality::Average => 2,
            SleepQuality::Good => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(SleepQuality::Poor),
            2 => Some(SleepQuality::Average),
            3 => Some(SleepQuality::Good),
            _ => None,
        }
    }

    /// Canned advice shown after a prediction
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            SleepQuality::Poor => &[
                "Reduce screen time before bed",
                "Avoid caffeine at night",
                "Try relaxation techniques",
            ],
            SleepQuality::Average => &[
                "Increase sleep duration slightly",
                "Maintain consistent bedtime",
            ],
            SleepQuality::Good => &["Excellent sleep habits 🌙 Keep it up!"],
        }
    }
}

macro_rules! impl_category {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseError::UnknownCategory {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_category!(Caffeine, "caffeine level");
impl_category!(Mood, "mood");
impl_category!(SleepQuality, "sleep quality");

/// One respondent's sleep-related inputs for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Hours slept
    pub sleep_duration: f64,
    /// Hour of day, 0-23
    pub bedtime: u32,
    /// Hour of day, 0-23
    pub wake_time: u32,
    pub caffeine: Caffeine,
    /// Minutes
    pub exercise: u32,
    /// Minutes of screen use before bed
    pub screen_time: u32,
    /// 1-10
    pub stress: u32,
    pub mood: Mood,
    /// 0 = slept through, 1 = woke up
    pub interruptions: u8,
}

/// A generated training example with its ground-truth label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRow {
    pub features: FeatureRow,
    pub sleep_quality: SleepQuality,
}

/// One recorded prediction within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub day: u32,
    pub sleep_duration: f64,
    pub sleep_quality: SleepQuality,
}
