use sleepwise_core::{Caffeine, FeatureRow, Mood};

pub fn sample_row() -> FeatureRow {
    FeatureRow {
        sleep_duration: 7.0,
        bedtime: 23,
        wake_time: 6,
        caffeine: Caffeine::None,
        exercise: 30,
        screen_time: 20,
        stress: 3,
        mood: Mood::Happy,
        interruptions: 0,
    }
}
