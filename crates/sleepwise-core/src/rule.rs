//! Ground-truth labeling for synthetic training rows

use crate::types::{FeatureRow, SleepQuality};

const GOOD_MIN_HOURS: f64 = 7.0;
const AVERAGE_MIN_HOURS: f64 = 6.0;
const GOOD_MAX_SCREEN_MINUTES: u32 = 60;
const GOOD_MAX_STRESS: u32 = 4;

/// Label a row. First matching tier wins; both hour thresholds are inclusive.
pub fn label_sleep(row: &FeatureRow) -> SleepQuality {
    if is_good(row) {
        SleepQuality::Good
    } else if row.sleep_duration >= AVERAGE_MIN_HOURS {
        SleepQuality::Average
    } else {
        SleepQuality::Poor
    }
}

fn is_good(row: &FeatureRow) -> bool {
    row.sleep_duration >= GOOD_MIN_HOURS
        && row.screen_time < GOOD_MAX_SCREEN_MINUTES
        && row.stress <= GOOD_MAX_STRESS
        && row.interruptions == 0
}
