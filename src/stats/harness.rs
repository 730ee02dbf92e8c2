// src/stats/harness.rs

//! Probability-table rows: empirical match fractions per vertex count.

use rand::Rng;
use tracing::debug;

use crate::dag::is_xy_tdg;
use crate::errors::{Result, SimdagError};
use crate::types::ProcessKind;

/// Smallest vertex count a probability row samples.
pub const MIN_PROB_ORDER: usize = 5;

/// Fraction of `trials` runs of `process` on `n` vertices that terminate on
/// an exact (x, y) task-dependency graph.
pub fn match_fraction<R: Rng>(
    process: ProcessKind,
    x: usize,
    y: usize,
    n: usize,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    if trials == 0 {
        return Err(SimdagError::InvalidParameter(
            "trial count must be positive".to_string(),
        ));
    }

    let mut matches = 0usize;
    for _ in 0..trials {
        let g = process.run(x, y, n, rng)?;
        if is_xy_tdg(&g, x, y) {
            matches += 1;
        }
    }
    Ok(matches as f64 / trials as f64)
}

/// Render one probability-table row for `process` and targets `(x, y)`.
///
/// For each vertex count from [`MIN_PROB_ORDER`] up to `max_order`, runs
/// `trials` trials and reports the empirical match fraction. The row is
/// formatted for direct inclusion in a typeset table: the parenthesized
/// target pair, `&`-separated ratios, and a trailing `\\` line-continuation
/// marker.
pub fn prob_row<R: Rng>(
    process: ProcessKind,
    x: usize,
    y: usize,
    max_order: usize,
    trials: usize,
    rng: &mut R,
) -> Result<String> {
    if max_order < MIN_PROB_ORDER {
        return Err(SimdagError::InvalidParameter(format!(
            "max order must be at least {MIN_PROB_ORDER} (got {max_order})"
        )));
    }
    if x.max(y) > MIN_PROB_ORDER {
        return Err(SimdagError::InvalidParameter(format!(
            "targets ({x}, {y}) exceed the smallest sampled vertex count {MIN_PROB_ORDER}"
        )));
    }

    let mut row = format!("({x}, {y})");
    for order in MIN_PROB_ORDER..=max_order {
        let ratio = match_fraction(process, x, y, order, trials, rng)?;
        debug!(%process, order, ratio, "probability column computed");
        row.push_str(&format!(" & {ratio}"));
    }
    row.push_str(" \\\\ ");
    Ok(row)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn match_fraction_is_a_probability() {
        let mut rng = SmallRng::seed_from_u64(1);
        let f = match_fraction(ProcessKind::Remove, 1, 1, 6, 50, &mut rng).unwrap();
        assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn match_fraction_rejects_zero_trials() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            match_fraction(ProcessKind::Add, 1, 1, 5, 0, &mut rng),
            Err(SimdagError::InvalidParameter(_))
        ));
    }

    #[test]
    fn prob_row_renders_the_table_grammar() {
        let mut rng = SmallRng::seed_from_u64(42);
        let row = prob_row(ProcessKind::Remove, 1, 2, 5, 100, &mut rng).unwrap();
        assert!(row.starts_with("(1, 2) & "));
        assert!(row.ends_with(" \\\\ "));
        // max_order = 5 samples exactly one vertex count.
        assert_eq!(row.matches('&').count(), 1);
    }

    #[test]
    fn prob_row_has_one_column_per_order() {
        let mut rng = SmallRng::seed_from_u64(9);
        let row = prob_row(ProcessKind::Add, 1, 1, 8, 20, &mut rng).unwrap();
        assert_eq!(row.matches('&').count(), 4);
    }

    #[test]
    fn prob_row_rejects_bad_ceilings_and_targets() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(prob_row(ProcessKind::Remove, 1, 1, 4, 10, &mut rng).is_err());
        assert!(prob_row(ProcessKind::Remove, 6, 1, 16, 10, &mut rng).is_err());
    }
}
