// src/stats/fit.rs

//! Least-squares fits of parametric curves to (x, y) sample vectors.
//!
//! Four of the five models are linear in their coefficients and solve in one
//! SVD pass. The shifted-logarithm model `a*ln(x + b) + c` is nonlinear in
//! `b` only, so it runs a bounded 1-D search over `b` with the exact linear
//! solve for `(a, c)` inside. Anything that fails to produce finite
//! coefficients surfaces as [`SimdagError::FitFailure`].

use nalgebra::{DMatrix, DVector};

use crate::errors::{Result, SimdagError};

/// Tolerance handed to the SVD solver when discarding singular values.
const SVD_EPS: f64 = 1.0e-12;

/// Coarse grid resolution for the shifted-log search over `b`.
const LOG_SHIFT_GRID: usize = 400;
/// Refinement rounds around the best coarse candidate.
const LOG_SHIFT_REFINE_ROUNDS: usize = 4;

/// The parametric curve families the harness fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitKind {
    /// `a*x + b`
    Linear,
    /// `a*x^2 + b*x + c`
    Quadratic,
    /// `a*sqrt(x) + b`
    SquareRoot,
    /// `a*x/ln(x) + b`; requires every sample x > 1.
    LinOverLog,
    /// `a*ln(x + b) + c`; nonlinear in the shift `b`.
    Logarithmic,
}

impl FitKind {
    fn coeff_count(self) -> usize {
        match self {
            FitKind::Linear | FitKind::SquareRoot | FitKind::LinOverLog => 2,
            FitKind::Quadratic | FitKind::Logarithmic => 3,
        }
    }
}

/// A fitted curve: the model family plus its least-squares coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    kind: FitKind,
    coeffs: Vec<f64>,
}

impl FittedCurve {
    pub fn kind(&self) -> FitKind {
        self.kind
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluate the fitted model at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let c = &self.coeffs;
        match self.kind {
            FitKind::Linear => c[0] * x + c[1],
            FitKind::Quadratic => c[0] * x * x + c[1] * x + c[2],
            FitKind::SquareRoot => c[0] * x.sqrt() + c[1],
            FitKind::LinOverLog => c[0] * x / x.ln() + c[1],
            FitKind::Logarithmic => c[0] * (x + c[1]).ln() + c[2],
        }
    }

    /// The formula with coefficients rounded to three decimals, as printed
    /// in reports and plot legends.
    pub fn formula(&self) -> String {
        let c = &self.coeffs;
        match self.kind {
            FitKind::Linear => format!("{}x{}", round3(c[0]), signed3(c[1])),
            FitKind::Quadratic => {
                format!("{}x^2{}x{}", round3(c[0]), signed3(c[1]), signed3(c[2]))
            }
            FitKind::SquareRoot => format!("{}sqrt(x){}", round3(c[0]), signed3(c[1])),
            FitKind::LinOverLog => format!("{}x/log(x){}", round3(c[0]), signed3(c[1])),
            FitKind::Logarithmic => {
                format!("{}log(x{}){}", round3(c[0]), signed3(c[1]), signed3(c[2]))
            }
        }
    }
}

/// Fit `kind` to the samples by least squares.
pub fn fit(kind: FitKind, xs: &[f64], ys: &[f64]) -> Result<FittedCurve> {
    if xs.len() != ys.len() {
        return Err(SimdagError::InvalidParameter(format!(
            "sample vectors differ in length ({} vs {})",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < kind.coeff_count() {
        return Err(SimdagError::FitFailure(format!(
            "{} samples cannot determine {} coefficients",
            xs.len(),
            kind.coeff_count()
        )));
    }

    let coeffs = match kind {
        FitKind::Linear => solve_basis(xs, ys, |x| vec![x, 1.0])?,
        FitKind::Quadratic => solve_basis(xs, ys, |x| vec![x * x, x, 1.0])?,
        FitKind::SquareRoot => {
            if xs.iter().any(|&x| x < 0.0) {
                return Err(SimdagError::FitFailure(
                    "sqrt model needs nonnegative samples".to_string(),
                ));
            }
            solve_basis(xs, ys, |x| vec![x.sqrt(), 1.0])?
        }
        FitKind::LinOverLog => {
            if xs.iter().any(|&x| x <= 1.0) {
                return Err(SimdagError::FitFailure(
                    "x/log(x) model needs every sample x > 1".to_string(),
                ));
            }
            solve_basis(xs, ys, |x| vec![x / x.ln(), 1.0])?
        }
        FitKind::Logarithmic => fit_shifted_log(xs, ys)?,
    };

    Ok(FittedCurve { kind, coeffs })
}

/// Solve the linear least-squares problem for a model that is linear in its
/// coefficients, given the per-sample basis row.
fn solve_basis(xs: &[f64], ys: &[f64], basis: impl Fn(f64) -> Vec<f64>) -> Result<Vec<f64>> {
    let rows: Vec<Vec<f64>> = xs.iter().map(|&x| basis(x)).collect();
    let cols = rows[0].len();
    let design = DMatrix::from_fn(xs.len(), cols, |r, c| rows[r][c]);
    let rhs = DVector::from_column_slice(ys);

    let solution = design
        .svd(true, true)
        .solve(&rhs, SVD_EPS)
        .map_err(|e| SimdagError::FitFailure(e.to_string()))?;

    let coeffs: Vec<f64> = solution.iter().copied().collect();
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(SimdagError::FitFailure(
            "solver produced non-finite coefficients".to_string(),
        ));
    }
    Ok(coeffs)
}

/// Fit `a*ln(x + b) + c`.
///
/// The shift `b` is the only nonlinear parameter, so scan it over a coarse
/// grid above `-min(x)` (keeping every `x + b` positive), solving for
/// `(a, c)` exactly at each candidate, then tighten the grid around the best
/// candidate a few times.
fn fit_shifted_log(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
    let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut lo = -min_x + 1.0e-3;
    let mut hi = (max_x * 10.0).max(lo + 1.0);
    let mut best: Option<(f64, f64, f64, f64)> = None; // (sse, a, b, c)

    for _ in 0..=LOG_SHIFT_REFINE_ROUNDS {
        let step = (hi - lo) / LOG_SHIFT_GRID as f64;
        for i in 0..=LOG_SHIFT_GRID {
            let b = lo + step * i as f64;
            let Ok(ac) = solve_basis(xs, ys, |x| vec![(x + b).ln(), 1.0]) else {
                continue;
            };
            let sse: f64 = xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| {
                    let r = ac[0] * (x + b).ln() + ac[1] - y;
                    r * r
                })
                .sum();
            if sse.is_finite() && best.map_or(true, |(s, ..)| sse < s) {
                best = Some((sse, ac[0], b, ac[1]));
            }
        }

        let Some((_, _, b, _)) = best else { break };
        // Narrow to one coarse step either side of the winner.
        lo = (b - step).max(-min_x + 1.0e-6);
        hi = b + step;
    }

    match best {
        Some((_, a, b, c)) => Ok(vec![a, b, c]),
        None => Err(SimdagError::FitFailure(
            "shifted-log search found no finite fit".to_string(),
        )),
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn signed3(v: f64) -> String {
    let r = round3(v);
    if r < 0.0 {
        format!("{r}")
    } else {
        format!("+{r}")
    }
}
