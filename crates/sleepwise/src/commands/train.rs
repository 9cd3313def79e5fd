use sleepwise_core::Config;
use sleepwise_learn::{SleepModel, TrainingReport};

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let (_, report) = SleepModel::train(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}

fn format_report(report: &TrainingReport) -> String {
    let mut lines = vec![
        "Training Report".to_string(),
        "===============".to_string(),
        format!("Rows: {} (train {}, test {})", report.rows, report.train_rows, report.test_rows),
        format!("Trees: {}  Seed: {}", report.n_trees, report.seed),
        "Labels:".to_string(),
    ];
    for (label, count) in &report.label_counts {
        lines.push(format!("  {label:<8} {count}"));
    }
    match report.accuracy {
        Some(accuracy) => lines.push(format!("Hold-out accuracy: {:.1}%", accuracy * 100.0)),
        None => lines.push("Hold-out accuracy: n/a (no rows held out)".to_string()),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_report(accuracy: Option<f64>) -> TrainingReport {
        let mut label_counts = BTreeMap::new();
        label_counts.insert("Average".to_string(), 300);
        label_counts.insert("Good".to_string(), 20);
        label_counts.insert("Poor".to_string(), 380);
        TrainingReport {
            rows: 700,
            train_rows: 560,
            test_rows: 140,
            seed: 42,
            n_trees: 250,
            label_counts,
            accuracy,
        }
    }

    #[test]
    fn test_format_report() {
        let text = format_report(&sample_report(Some(0.95)));
        assert!(text.contains("Rows: 700 (train 560, test 140)"));
        assert!(text.contains("Good"));
        assert!(text.contains("Hold-out accuracy: 95.0%"));
    }

    #[test]
    fn test_format_report_without_holdout() {
        let text = format_report(&sample_report(None));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_report_json_fields() {
        let json = serde_json::to_value(sample_report(Some(0.9))).unwrap();
        assert_eq!(json["rows"], 700);
        assert_eq!(json["label_counts"]["Poor"], 380);
        assert_eq!(json["accuracy"], 0.9);
    }
}
