use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scoring::ThresholdScheme;
use crate::view::SortMode;

#[derive(Parser, Debug)]
#[command(name = "purindb")]
#[command(about = "Purine content reference for foods", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Dataset JSON file (overrides the config file)
    #[arg(long, global = true, env = "PURINDB_DATA")]
    pub data: Option<PathBuf>,

    /// Settings JSON file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "PURINDB_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Config file (defaults to .purindb.toml in this or a parent directory)
    #[arg(long, global = true, env = "PURINDB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search foods by name, category or preparation
    Search {
        query: String,

        /// Sort mode for this run (total, serving, weighted)
        #[arg(long)]
        sort: Option<SortMode>,

        /// Pin a food for comparison (repeatable)
        #[arg(long = "pin", value_name = "INDEX")]
        pins: Vec<usize>,
    },

    /// List categories with food counts
    Categories {
        #[arg(long = "pin", value_name = "INDEX")]
        pins: Vec<usize>,
    },

    /// List the foods in one category
    Category {
        name: String,

        #[arg(long)]
        sort: Option<SortMode>,

        #[arg(long = "pin", value_name = "INDEX")]
        pins: Vec<usize>,
    },

    /// Show one food in detail
    Show {
        /// Food index as printed in listings
        index: usize,

        /// Display mode for this run (total, serving, weighted)
        #[arg(long)]
        mode: Option<SortMode>,

        #[arg(long = "pin", value_name = "INDEX")]
        pins: Vec<usize>,
    },

    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Merge a purine CSV export into the dataset
    Merge {
        /// CSV file to import
        #[arg(long)]
        csv: PathBuf,

        /// Write a text report here
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Restore all defaults
    Reset,
    /// Set color thresholds for one scheme
    Thresholds {
        #[arg(value_enum)]
        scheme: SchemeArg,
        low_to_moderate: f64,
        moderate_to_high: f64,
        high_to_very_high: f64,
    },
    /// Set the persisted search sort mode
    SearchSort { mode: SortMode },
    /// Set the persisted detail view mode
    DetailMode { mode: SortMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// Total purines per 100g
    #[value(name = "per100g")]
    Per100g,
    /// Total purines per serving
    #[value(name = "per-serving")]
    PerServing,
    /// Weighted score (risk)
    Risk,
}

impl From<SchemeArg> for ThresholdScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Per100g => ThresholdScheme::Per100g,
            SchemeArg::PerServing => ThresholdScheme::PerServing,
            SchemeArg::Risk => ThresholdScheme::Risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_with_sort_and_pins() {
        let cli = Cli::try_parse_from([
            "purindb", "search", "laks", "--sort", "risk", "--pin", "3", "--pin", "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { query, sort, pins } => {
                assert_eq!(query, "laks");
                assert_eq!(sort, Some(SortMode::Weighted));
                assert_eq!(pins, vec![3, 7]);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli =
            Cli::try_parse_from(["purindb", "categories", "--data", "foods.json", "--plain"]).unwrap();
        assert_eq!(cli.global.data, Some(PathBuf::from("foods.json")));
        assert!(cli.global.plain);
    }

    #[test]
    fn test_settings_thresholds() {
        let cli = Cli::try_parse_from([
            "purindb", "settings", "thresholds", "per-serving", "20", "80", "120",
        ])
        .unwrap();
        match cli.command {
            Commands::Settings {
                action:
                    SettingsAction::Thresholds {
                        scheme,
                        low_to_moderate,
                        ..
                    },
            } => {
                assert_eq!(ThresholdScheme::from(scheme), ThresholdScheme::PerServing);
                assert_eq!(low_to_moderate, 20.0);
            }
            _ => panic!("Expected settings thresholds"),
        }
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["purindb", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_unknown_sort_mode_is_rejected() {
        assert!(Cli::try_parse_from(["purindb", "search", "laks", "--sort", "alphabetical"]).is_err());
    }
}
