//! Command-line argument definitions for the bikeshare explorer
//!
//! This module defines the CLI interface using the clap derive API. Options
//! shared by every command are global, so they may appear before or after
//! the subcommand name.

use crate::app::models::{City, DaySelector, MonthSelector, Selection, TripFilter};
use crate::config::{BikeshareConfig, TimestampPolicy};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bikeshare explorer
///
/// Explores US bikeshare trip data for Chicago, New York City and Washington.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare-explorer",
    version,
    about = "Explore US bikeshare trip data for Chicago, New York City and Washington",
    long_about = "Loads one city's bikeshare trip file, filters trips by month and day of week, \
                  and reports the most frequent travel times, the most popular stations and trips, \
                  trip duration totals, and user statistics. Runs interactively by default."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Prompt for a city, month and day, then print statistics (default command)
    Explore,
    /// Print statistics for a selection given on the command line
    Stats(StatsArgs),
    /// Report a city file's columns, row counts and monthly distribution
    Inspect(InspectArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Directory containing the city CSV files
    ///
    /// Overrides the data directory from the configuration file.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        global = true,
        help = "Directory containing the city CSV files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML file overriding file names, timestamp formats and the bad row
    /// policy. Built-in defaults apply when omitted.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Abort loading on the first row with an unparseable required field
    #[arg(
        long = "strict",
        global = true,
        help = "Fail on the first unparseable row instead of skipping it"
    )]
    pub strict: bool,

    /// Number of start/end station pairs to list
    #[arg(
        long = "top-trips",
        value_name = "COUNT",
        global = true,
        help = "Number of popular trips to list"
    )]
    pub top_trips: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also hides the loading spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, ClapArgs)]
pub struct StatsArgs {
    /// City to analyze: chicago, "new york city" or washington
    #[arg(long = "city", value_name = "CITY")]
    pub city: City,

    /// Month to keep (january to june), or all
    #[arg(long = "month", value_name = "MONTH", default_value = "all")]
    pub month: MonthSelector,

    /// Day of week to keep, or all
    #[arg(long = "day", value_name = "DAY", default_value = "all")]
    pub day: DaySelector,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, ClapArgs)]
pub struct InspectArgs {
    /// City whose file should be inspected
    #[arg(long = "city", value_name = "CITY")]
    pub city: City,

    /// Output format for the inspection
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable coloured output
    Human,
    /// Pretty-printed JSON for scripting
    Json,
}

impl Args {
    /// The command to run, defaulting to interactive exploration
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Explore)
    }
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the loading spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.top_trips == Some(0) {
            return Err(Error::configuration(
                "Number of top trips must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Build the loader configuration from the config file and overrides
    pub fn build_config(&self) -> Result<BikeshareConfig> {
        self.validate()?;

        let mut config = match &self.config_file {
            Some(path) => BikeshareConfig::from_toml_file(path)?,
            None => BikeshareConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir);
        }
        if self.strict {
            config = config.with_timestamp_policy(TimestampPolicy::Strict);
        }
        if let Some(top_trips) = self.top_trips {
            config = config.with_top_trips(top_trips);
        }

        config.validate()?;
        Ok(config)
    }
}

impl StatsArgs {
    pub fn selection(&self) -> Selection {
        Selection::new(self.city, TripFilter::new(self.month, self.day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Month, Weekday};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_subcommand_defaults_to_explore() {
        let args = Args::try_parse_from(["bikeshare-explorer"]).unwrap();
        assert!(matches!(args.command(), Commands::Explore));
    }

    #[test]
    fn test_stats_arguments() {
        let args = Args::try_parse_from([
            "bikeshare-explorer",
            "stats",
            "--city",
            "New York City",
            "--month",
            "March",
            "--day",
            "friday",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Stats(stats) = args.command() else {
            panic!("expected stats command");
        };
        let selection = stats.selection();
        assert_eq!(selection.city, City::NewYorkCity);
        assert_eq!(selection.filter.month, MonthSelector::Only(Month::March));
        assert_eq!(selection.filter.day, DaySelector::Only(Weekday::Friday));
        assert_eq!(stats.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_stats_selectors_default_to_all() {
        let args =
            Args::try_parse_from(["bikeshare-explorer", "stats", "--city", "chicago"]).unwrap();

        let Commands::Stats(stats) = args.command() else {
            panic!("expected stats command");
        };
        assert!(stats.selection().filter.is_unfiltered());
        assert_eq!(stats.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let result = Args::try_parse_from([
            "bikeshare-explorer",
            "stats",
            "--city",
            "chicago",
            "--month",
            "july",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "bikeshare-explorer",
            "inspect",
            "--city",
            "washington",
            "--strict",
            "-vv",
        ])
        .unwrap();

        assert!(args.common.strict);
        assert_eq!(args.common.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["bikeshare-explorer", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_levels() {
        let mut common = CommonArgs::default();
        assert_eq!(common.get_log_level(), "warn");

        common.verbose = 3;
        assert_eq!(common.get_log_level(), "trace");

        common.verbose = 0;
        common.quiet = true;
        assert_eq!(common.get_log_level(), "error");
        assert!(!common.show_progress());
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bikeshare.toml");
        fs::write(&config_path, "top_trips = 3\n[files]\nchicago = \"chi.csv\"\n").unwrap();

        let common = CommonArgs {
            data_dir: Some(dir.path().to_path_buf()),
            config_file: Some(config_path),
            strict: true,
            ..Default::default()
        };
        let config = common.build_config().unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.timestamp_policy, TimestampPolicy::Strict);
        assert_eq!(config.top_trips, 3);
        assert_eq!(config.source_path(City::Chicago), dir.path().join("chi.csv"));
    }

    #[test]
    fn test_build_config_rejects_missing_data_dir() {
        let common = CommonArgs {
            data_dir: Some(PathBuf::from("/nonexistent/bikeshare-data")),
            ..Default::default()
        };
        assert!(matches!(
            common.build_config(),
            Err(Error::Configuration { .. })
        ));
    }
}
