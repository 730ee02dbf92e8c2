// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod plot;
pub mod process;
pub mod stats;
pub mod types;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;
use crate::errors::{Result, SimdagError};
use crate::plot::{Panel, render_grid};
use crate::stats::{FitKind, MIN_SUMMARY_ORDER, collect_summaries, fit, prob_row};
use crate::types::ProcessKind;

/// High-level entry point used by `main.rs`.
///
/// Dispatches the chosen subcommand:
/// - `prob`: one probability row to stdout
/// - `table`: the config-described batch of rows to stdout
/// - `plot`: the edge/longest-path sweep, its fits, and the SVG grid
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Prob {
            process,
            x,
            y,
            max_order,
            trials,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let row = prob_row(process, x, y, max_order, trials, &mut rng)?;
            println!("{row}");
            Ok(())
        }
        Command::Table { config } => run_table(&config),
        Command::Plot {
            max_order,
            trials,
            out,
            seed,
        } => run_plot(max_order, trials, &out, seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn run_table(config_path: &str) -> Result<()> {
    let cfg = load_and_validate(config_path)?;
    let mut rng = make_rng(cfg.config.seed);

    info!(
        rows = cfg.rows.len(),
        trials = cfg.config.trials,
        max_order = cfg.config.max_order,
        "running probability table"
    );

    for row in &cfg.rows {
        let line = prob_row(
            row.process,
            row.x,
            row.y,
            cfg.config.max_order,
            cfg.config.trials,
            &mut rng,
        )?;
        println!("{line}");
    }
    Ok(())
}

fn run_plot(max_order: usize, trials: usize, out: &str, seed: Option<u64>) -> Result<()> {
    // The quadratic and shifted-log fits carry three coefficients, so the
    // sweep must sample at least three orders.
    if max_order < MIN_SUMMARY_ORDER + 3 {
        return Err(SimdagError::InvalidParameter(format!(
            "max order must be at least {} for the curve fits (got {max_order})",
            MIN_SUMMARY_ORDER + 3
        )));
    }

    let mut rng = make_rng(seed);
    let remove = collect_summaries(ProcessKind::Remove, max_order, trials, &mut rng)?;
    let add = collect_summaries(ProcessKind::Add, max_order, trials, &mut rng)?;

    let xs: Vec<f64> = remove.iter().map(|s| s.order as f64).collect();
    let remove_edges: Vec<f64> = remove.iter().map(|s| s.mean_edges).collect();
    let remove_cpl: Vec<f64> = remove.iter().map(|s| s.mean_longest_path).collect();
    let add_edges: Vec<f64> = add.iter().map(|s| s.mean_edges).collect();
    let add_cpl: Vec<f64> = add.iter().map(|s| s.mean_longest_path).collect();

    let remove_edge_fit = fit(FitKind::Linear, &xs, &remove_edges)?;
    let remove_cpl_fit = fit(FitKind::Logarithmic, &xs, &remove_cpl)?;
    let add_edge_fit = fit(FitKind::Quadratic, &xs, &add_edges)?;
    let add_cpl_fit = fit(FitKind::Linear, &xs, &add_cpl)?;

    // Competing longest-path models for the remove process, reported for
    // comparison with the logarithmic panel.
    let alt_linear = fit(FitKind::Linear, &xs, &remove_cpl)?;
    let alt_sqrt = fit(FitKind::SquareRoot, &xs, &remove_cpl)?;
    let alt_lin_over_log = fit(FitKind::LinOverLog, &xs, &remove_cpl)?;
    info!(
        linear = %alt_linear.formula(),
        sqrt = %alt_sqrt.formula(),
        lin_over_log = %alt_lin_over_log.formula(),
        "alternative remove-process longest-path fits"
    );

    println!("(a) fit curve {}", remove_edge_fit.formula());
    println!("(b) fit curve {}", remove_cpl_fit.formula());
    println!("(c) fit curve {}", add_edge_fit.formula());
    println!("(d) fit curve {}", add_cpl_fit.formula());

    let panels = [
        Panel::new("(a)", zip_points(&xs, &remove_edges), remove_edge_fit),
        Panel::new("(b)", zip_points(&xs, &remove_cpl), remove_cpl_fit),
        Panel::new("(c)", zip_points(&xs, &add_edges), add_edge_fit),
        Panel::new("(d)", zip_points(&xs, &add_cpl), add_cpl_fit),
    ];
    render_grid(Path::new(out), &panels, max_order as f64)?;
    info!(path = %out, "plot grid written");
    Ok(())
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}
