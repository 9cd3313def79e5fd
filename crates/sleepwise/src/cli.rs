use clap::{Args, Parser, Subcommand};
use sleepwise_core::Config;

#[derive(Parser)]
#[command(name = "sleepwise")]
#[command(version)]
#[command(about = "Predict sleep quality from daily habits")]
pub struct Cli {
    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train the model, then start an interactive session
    Run {
        #[command(flatten)]
        training: TrainingArgs,
    },

    /// Train the model and print hold-out accuracy
    Train {
        #[command(flatten)]
        training: TrainingArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct TrainingArgs {
    /// Synthetic rows to generate
    #[arg(long, default_value_t = Config::new().rows)]
    pub rows: usize,

    /// RNG seed for data generation, split and forest
    #[arg(long, default_value_t = Config::new().seed)]
    pub seed: u64,

    /// Trees in the random forest
    #[arg(long, default_value_t = Config::new().n_trees)]
    pub trees: usize,

    /// Maximum tree depth (unlimited if omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Share of rows held out for evaluation
    #[arg(long, default_value_t = Config::new().test_fraction)]
    pub test_fraction: f64,
}

impl TrainingArgs {
    pub fn to_config(&self) -> Config {
        Config {
            rows: self.rows,
            seed: self.seed,
            n_trees: self.trees,
            test_fraction: self.test_fraction,
            max_depth: self.max_depth,
            ..Config::default()
        }
    }
}

impl Default for TrainingArgs {
    fn default() -> Self {
        let config = Config::default();
        Self {
            rows: config.rows,
            seed: config.seed,
            trees: config.n_trees,
            max_depth: config.max_depth,
            test_fraction: config.test_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["sleepwise"]);
        assert!(cli.is_ok());
        assert!(cli.unwrap().command.is_none());
    }

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["sleepwise", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parse_run_defaults() {
        let cli = Cli::try_parse_from(["sleepwise", "run"]).unwrap();
        if let Some(Commands::Run { training }) = cli.command {
            assert_eq!(training, TrainingArgs::default());
            assert_eq!(training.to_config(), Config::default());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_train_overrides() {
        let cli = Cli::try_parse_from([
            "sleepwise",
            "train",
            "--rows",
            "300",
            "--seed",
            "7",
            "--trees",
            "50",
            "--max-depth",
            "6",
            "--json",
        ])
        .unwrap();
        if let Some(Commands::Train { training, json }) = cli.command {
            assert!(json);
            let config = training.to_config();
            assert_eq!(config.rows, 300);
            assert_eq!(config.seed, 7);
            assert_eq!(config.n_trees, 50);
            assert_eq!(config.max_depth, Some(6));
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_cli_rejects_bad_number() {
        assert!(Cli::try_parse_from(["sleepwise", "run", "--rows", "many"]).is_err());
    }
}
