// src/plot/mod.rs

//! 2x2 scatter + fit-curve comparison grid, rendered to SVG.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::{Result, SimdagError};
use crate::stats::FittedCurve;

const PANEL_POINT_SIZE: i32 = 3;
const CURVE_SAMPLES: usize = 50;

/// One panel of the grid: a caption, the measured points, and the curve
/// fitted to them.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub points: Vec<(f64, f64)>,
    pub curve: FittedCurve,
}

impl Panel {
    pub fn new(title: &str, points: Vec<(f64, f64)>, curve: FittedCurve) -> Self {
        Self {
            title: title.to_string(),
            points,
            curve,
        }
    }
}

/// Render `panels` as a 2x2 grid into an SVG file at `path`.
///
/// Every panel spans x in `[2, x_max]` and y in `[0, last_mean * 1.2]`, with
/// the fitted curve drawn over a dense sample of the x range and its formula
/// in the legend.
pub fn render_grid(path: &Path, panels: &[Panel], x_max: f64) -> Result<()> {
    let root = SVGBackend::new(path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let areas = root.split_evenly((2, 2));
    for (area, panel) in areas.iter().zip(panels) {
        draw_panel(area, panel, x_max)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &Panel, x_max: f64) -> Result<()> {
    let y_max = panel
        .points
        .last()
        .map(|&(_, y)| (y * 1.2).max(1.0))
        .unwrap_or(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d(2.0..x_max, 0.0..y_max)
        .map_err(plot_err)?;

    chart.configure_mesh().draw().map_err(plot_err)?;

    chart
        .draw_series(
            panel
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), PANEL_POINT_SIZE, BLUE.filled())),
        )
        .map_err(plot_err)?
        .label("data points")
        .legend(|(x, y)| Circle::new((x + 10, y), PANEL_POINT_SIZE, BLUE.filled()));

    let curve = panel.curve.clone();
    chart
        .draw_series(LineSeries::new(
            linspace(2.0, x_max, CURVE_SAMPLES)
                .into_iter()
                .map(move |x| (x, curve.eval(x))),
            &RED,
        ))
        .map_err(plot_err)?
        .label(format!("fit curve {}", panel.curve.formula()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

/// `count` evenly spaced samples covering `[a, b]`.
pub fn linspace(a: f64, b: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![a];
    }
    let step = (b - a) / (count - 1) as f64;
    (0..count).map(|i| a + step * i as f64).collect()
}

fn plot_err<E: std::fmt::Display>(e: E) -> SimdagError {
    SimdagError::PlotError(e.to_string())
}
