// src/stats/summary.rs

//! Per-order structural summaries: mean edge count and mean longest path.

use rand::Rng;
use tracing::info;

use crate::errors::{Result, SimdagError};
use crate::types::ProcessKind;

/// Smallest vertex count the summary sweep samples.
pub const MIN_SUMMARY_ORDER: usize = 3;

/// Mean structure of a process's terminal graphs at one vertex count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub order: usize,
    pub mean_edges: f64,
    pub mean_longest_path: f64,
}

/// Sample `trials` runs of `process` at targets (1, 1) for every vertex
/// count in `MIN_SUMMARY_ORDER..max_order` (exclusive ceiling) and average
/// the edge count and longest-path length of the terminal graphs.
pub fn collect_summaries<R: Rng>(
    process: ProcessKind,
    max_order: usize,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<OrderSummary>> {
    if trials == 0 {
        return Err(SimdagError::InvalidParameter(
            "trial count must be positive".to_string(),
        ));
    }
    if max_order <= MIN_SUMMARY_ORDER {
        return Err(SimdagError::InvalidParameter(format!(
            "max order must exceed {MIN_SUMMARY_ORDER} (got {max_order})"
        )));
    }

    let mut summaries = Vec::with_capacity(max_order - MIN_SUMMARY_ORDER);
    for order in MIN_SUMMARY_ORDER..max_order {
        let mut edge_total = 0.0;
        let mut path_total = 0.0;
        for _ in 0..trials {
            let g = process.run(1, 1, order, rng)?;
            edge_total += g.edge_count() as f64;
            path_total += g.longest_path_len() as f64;
        }
        let summary = OrderSummary {
            order,
            mean_edges: edge_total / trials as f64,
            mean_longest_path: path_total / trials as f64,
        };
        info!(
            %process,
            order,
            mean_edges = summary.mean_edges,
            mean_longest_path = summary.mean_longest_path,
            "order summarised"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
