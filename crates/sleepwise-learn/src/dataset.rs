//! Synthetic training data

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use sleepwise_core::{label_sleep, Caffeine, FeatureRow, LabeledRow, Mood};

/// Generate `rows` labeled rows from a seeded RNG
pub fn generate(rows: usize, seed: u64) -> Vec<LabeledRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            let features = sample_row(&mut rng);
            let sleep_quality = label_sleep(&features);
            LabeledRow {
                features,
                sleep_quality,
            }
        })
        .collect()
}

fn sample_row<R: Rng>(rng: &mut R) -> FeatureRow {
    FeatureRow {
        sleep_duration: rng.gen_range(4.0..9.0),
        bedtime: rng.gen_range(20..24),
        wake_time: rng.gen_range(5..9),
        caffeine: Caffeine::ALL[rng.gen_range(0..Caffeine::ALL.len())],
        exercise: rng.gen_range(0..90),
        screen_time: rng.gen_range(0..180),
        stress: rng.gen_range(1..11),
        mood: Mood::ALL[rng.gen_range(0..Mood::ALL.len())],
        interruptions: rng.gen_range(0..=1),
    }
}

/// Shuffle and split into (train, test).
///
/// The test side gets `ceil(len * test_fraction)` rows, capped so at least
/// one row is left for training.
pub fn train_test_split<T: Clone, R: Rng>(
    rows: &[T],
    test_fraction: f64,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.shuffle(rng);

    let wanted = (rows.len() as f64 * test_fraction.clamp(0.0, 1.0)).ceil() as usize;
    let n_test = wanted.min(rows.len().saturating_sub(1));

    let test = order[..n_test].iter().map(|&i| rows[i].clone()).collect();
    let train = order[n_test..].iter().map(|&i| rows[i].clone()).collect();
    (train, test)
}
