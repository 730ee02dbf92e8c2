// src/process/add.rs

//! The (x, y) edge-add process.

use rand::Rng;
use tracing::debug;

use crate::dag::{Tdg, exterior_vertices};
use crate::errors::Result;
use crate::process::{EdgePool, validate_params};

/// Run the (x, y) edge-add process on `n` vertices.
///
/// Starting from the empty graph, edges are drawn uniformly without
/// replacement from the forward-edge universe and tentatively inserted. An
/// insertion is kept only if the resulting graph still has at least `x`
/// initial and at least `y` terminal vertices; otherwise the edge is taken
/// out again. The moment an accepted insertion leaves the graph with
/// *exactly* `x` initial and `y` terminal vertices, the run returns that
/// graph immediately, abandoning the rest of the pool. Otherwise it ends
/// when the pool is exhausted.
///
/// The exact-match check runs only on the freshly formed candidate, never at
/// the top of the loop: if a rejected candidate's predecessor graph already
/// matched the target, that is not detected. This is deliberate; checking
/// elsewhere changes the distributions the harness measures.
pub fn edge_add<R: Rng>(x: usize, y: usize, n: usize, rng: &mut R) -> Result<Tdg> {
    validate_params(x, y, n)?;

    let mut g = Tdg::empty(n);
    let mut pool = EdgePool::forward(n);
    debug!(x, y, n, pool = pool.len(), "starting edge-add process");

    while let Some((u, v)) = pool.draw(rng) {
        g.add_edge(u, v);
        let exterior = exterior_vertices(&g);
        let (initial, terminal) = (exterior.initial.len(), exterior.terminal.len());
        if initial >= x && terminal >= y {
            if initial == x && terminal == y {
                debug!(
                    edges = g.edge_count(),
                    remaining = pool.len(),
                    "edge-add hit the exact target"
                );
                return Ok(g);
            }
        } else {
            g.remove_edge(u, v);
        }
    }

    debug!(edges = g.edge_count(), "edge-add exhausted its pool");
    Ok(g)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::dag::is_xy_tdg;
    use crate::errors::SimdagError;

    #[test]
    fn rejects_invalid_parameters_before_mutating() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            edge_add(1, 0, 5, &mut rng),
            Err(SimdagError::InvalidParameter(_))
        ));
        assert!(matches!(
            edge_add(5, 1, 4, &mut rng),
            Err(SimdagError::InvalidParameter(_))
        ));
    }

    #[test]
    fn exterior_counts_never_drop_below_bounds() {
        // The empty start satisfies the lower bounds (n >= max(x, y)) and
        // every accepted insertion preserves them.
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let g = edge_add(2, 2, 7, &mut rng).unwrap();
            let ext = exterior_vertices(&g);
            assert!(ext.initial.len() >= 2);
            assert!(ext.terminal.len() >= 2);
        }
    }

    #[test]
    fn two_vertices_exit_early_with_one_edge() {
        // The only candidate (0, 1) turns the empty 2-graph into the (1, 1)
        // target, so the run commits it and returns at once.
        let mut rng = SmallRng::seed_from_u64(5);
        let g = edge_add(1, 1, 2, &mut rng).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(is_xy_tdg(&g, 1, 1));
    }

    #[test]
    fn tight_targets_always_exit_early_with_the_exact_pair() {
        // At (1, 1) no insertion is ever rejected (a nonempty DAG always has
        // a source and a sink), so every run marches toward the complete DAG
        // and returns the moment the counts first hit (1, 1).
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let g = edge_add(1, 1, 6, &mut rng).unwrap();
            assert!(is_xy_tdg(&g, 1, 1), "seed {seed} missed the target");
        }
    }
}
