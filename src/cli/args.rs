//! Command line argument parsing and validation.
//!
//! Parsing is left to clap; conflicting selectors and the log level are checked
//! by [`Args::validate`] so the messages match what CI scripts grep for.

use crate::config::DEFAULT_TEST_CONFIG;
use crate::error::CliError;
use crate::lifecycle::{BundleSelector, RunOptions};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Functional test runner for charms
#[derive(Parser, Debug, Clone)]
#[command(
    name = "func_test_runner",
    version,
    about = "Deploy the charm's test bundles and run its functional tests",
    long_about = "Runs the full functional test lifecycle for every bundle selected from tests/tests.yaml:

  add model -> deploy bundle -> configure -> test -> destroy model

Usage:
  func_test_runner                      # every gate bundle
  func_test_runner --smoke              # smoke bundles only
  func_test_runner --dev --keep-model   # dev bundles, keep the last model
  func_test_runner -b bionic-queens     # a single bundle from tests/bundles/"
)]
pub struct Args {
    /// Keep the model from the last bundle at the end of the run
    #[arg(long)]
    pub keep_model: bool,

    /// Just run smoke test(s)
    #[arg(long)]
    pub smoke: bool,

    /// Just run dev test(s)
    #[arg(long)]
    pub dev: bool,

    /// Override the bundle to be run
    #[arg(short = 'b', long, value_name = "BUNDLE")]
    pub bundle: Option<String>,

    /// Loglevel [DEBUG|INFO|WARN|ERROR|CRITICAL]
    #[arg(long = "log", value_name = "LEVEL", default_value = "INFO")]
    pub loglevel: String,

    /// Configuration file in YAML format
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TEST_CONFIG)]
    pub config: PathBuf,
}

/// Arguments that passed validation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub log_level: LevelFilter,
    pub options: RunOptions,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check the log level and selector combination.
    ///
    /// Nothing has been logged or run when this fails.
    pub fn validate(&self) -> Result<Invocation, CliError> {
        let log_level = parse_log_level(&self.loglevel)?;
        let selector = self.selector()?;

        Ok(Invocation {
            log_level,
            options: RunOptions {
                keep_model: self.keep_model,
                selector,
                config: Some(self.config.clone()),
            },
        })
    }

    fn selector(&self) -> Result<BundleSelector, CliError> {
        if self.dev && self.smoke {
            return Err(CliError::AmbiguousArguments {
                first: "--smoke",
                second: "--dev",
            });
        }
        if self.dev && self.bundle.is_some() {
            return Err(CliError::AmbiguousArguments {
                first: "--bundle",
                second: "--dev",
            });
        }
        if self.smoke && self.bundle.is_some() {
            return Err(CliError::AmbiguousArguments {
                first: "--bundle",
                second: "--smoke",
            });
        }

        Ok(match (&self.bundle, self.smoke, self.dev) {
            (Some(bundle), _, _) => BundleSelector::Explicit(bundle.clone()),
            (None, true, _) => BundleSelector::Smoke,
            (None, _, true) => BundleSelector::Dev,
            (None, false, false) => BundleSelector::Gate,
        })
    }
}

/// Map a log level name, in any case, to a filter.
///
/// Accepts the conventional severity names including `WARNING`, `CRITICAL`,
/// `FATAL` and `NOTSET`; the last three map onto the nearest `log` level.
pub fn parse_log_level(level: &str) -> Result<LevelFilter, CliError> {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" | "NOTSET" => Ok(LevelFilter::Trace),
        "DEBUG" => Ok(LevelFilter::Debug),
        "INFO" => Ok(LevelFilter::Info),
        "WARN" | "WARNING" => Ok(LevelFilter::Warn),
        "ERROR" | "CRITICAL" | "FATAL" => Ok(LevelFilter::Error),
        _ => Err(CliError::InvalidLogLevel {
            level: level.to_string(),
        }),
    }
}
