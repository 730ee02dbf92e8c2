// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::ProcessKind;

/// Command-line arguments for `simdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "simdag",
    version,
    about = "Measure stochastic edge-mutation processes on task-dependency DAGs.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SIMDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute one probability row: the fraction of runs hitting the exact
    /// (x, y) target, per vertex count from 5 up to --max-order.
    Prob {
        /// Process to run ("remove" or "add").
        #[arg(long, value_enum)]
        process: ProcessKind,

        /// Target number of initial (zero in-degree) vertices.
        #[arg(long)]
        x: usize,

        /// Target number of terminal (zero out-degree) vertices.
        #[arg(long)]
        y: usize,

        /// Largest vertex count to sample (row covers 5..=max-order).
        #[arg(long, value_name = "N", default_value_t = 16)]
        max_order: usize,

        /// Trials per vertex count.
        #[arg(long, default_value_t = 1000)]
        trials: usize,

        /// RNG seed for a reproducible row; random if omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the batch of probability rows described by a TOML config file.
    Table {
        /// Path to the config file (TOML).
        ///
        /// Default: `Simdag.toml` in the current working directory.
        #[arg(long, value_name = "PATH", default_value = "Simdag.toml")]
        config: String,
    },

    /// Collect edge-count and longest-path statistics at x = y = 1, fit
    /// parametric curves, and render a 2x2 comparison grid as SVG.
    Plot {
        /// Upper vertex-count ceiling (orders cover 3..max-order).
        #[arg(long, value_name = "N", default_value_t = 41)]
        max_order: usize,

        /// Trials per vertex count.
        #[arg(long, default_value_t = 1000)]
        trials: usize,

        /// Output SVG path.
        #[arg(long, value_name = "PATH", default_value = "simdag-plots.svg")]
        out: String,

        /// RNG seed for a reproducible run; random if omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
