use sleepwise_core::Config;

pub fn run() -> anyhow::Result<()> {
    print!("{}", format_version(&Config::default()));
    Ok(())
}

fn format_version(config: &Config) -> String {
    let depth = config
        .max_depth
        .map_or_else(|| "unlimited".to_string(), |d| d.to_string());
    format!(
        "sleepwise {}\n\
         model: random forest, {} trees, max depth {}\n\
         training: {} synthetic rows, seed {}, {:.0}% held out\n",
        env!("CARGO_PKG_VERSION"),
        config.n_trees,
        depth,
        config.rows,
        config.seed,
        config.test_fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lists_training_defaults() {
        let text = format_version(&Config::default());
        assert!(text.starts_with(&format!("sleepwise {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("250 trees, max depth unlimited"));
        assert!(text.contains("700 synthetic rows, seed 42, 20% held out"));
    }

    #[test]
    fn test_version_reflects_depth_limit() {
        let config = Config {
            max_depth: Some(8),
            ..Config::default()
        };
        assert!(format_version(&config).contains("max depth 8"));
    }
}
