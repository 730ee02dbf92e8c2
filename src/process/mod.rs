// src/process/mod.rs

//! The two stochastic edge-mutation processes.
//!
//! - [`remove`]: delete edges from the complete DAG, keeping the exterior
//!   counts within upper bounds.
//! - [`add`]: insert edges into the empty graph, keeping the counts above
//!   lower bounds, with an early exit on an exact target hit.
//! - [`pool`]: the shared without-replacement candidate-edge sampler.
//!
//! Both processes take the RNG by `&mut` so callers can seed a run for
//! reproducibility or thread one generator through a whole batch.

pub mod add;
pub mod pool;
pub mod remove;

pub use add::edge_add;
pub use pool::EdgePool;
pub use remove::edge_remove;

use rand::Rng;

use crate::dag::Tdg;
use crate::errors::{Result, SimdagError};
use crate::types::ProcessKind;

impl ProcessKind {
    /// Run this process with targets `(x, y)` on `n` vertices.
    pub fn run<R: Rng>(self, x: usize, y: usize, n: usize, rng: &mut R) -> Result<Tdg> {
        match self {
            ProcessKind::Remove => edge_remove(x, y, n, rng),
            ProcessKind::Add => edge_add(x, y, n, rng),
        }
    }
}

/// Validate the shared `(x, y, n)` parameter contract.
///
/// Both targets must be positive and the graph must have room for them;
/// failing fast here means an invalid call never mutates anything.
pub(crate) fn validate_params(x: usize, y: usize, n: usize) -> Result<()> {
    if x == 0 || y == 0 {
        return Err(SimdagError::InvalidParameter(format!(
            "targets must be positive (got x = {x}, y = {y})"
        )));
    }
    if n < x.max(y) {
        return Err(SimdagError::InvalidParameter(format!(
            "vertex count {n} is smaller than max(x, y) = {}",
            x.max(y)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_targets() {
        assert!(validate_params(0, 1, 5).is_err());
        assert!(validate_params(1, 0, 5).is_err());
    }

    #[test]
    fn rejects_too_small_vertex_count() {
        assert!(validate_params(2, 3, 2).is_err());
        assert!(validate_params(3, 3, 3).is_ok());
    }
}
