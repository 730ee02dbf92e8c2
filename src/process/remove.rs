// src/process/remove.rs

//! The (x, y) edge-remove process.

use rand::Rng;
use tracing::debug;

use crate::dag::{Tdg, exterior_vertices};
use crate::errors::Result;
use crate::process::{EdgePool, validate_params};

/// Run the (x, y) edge-remove process on `n` vertices.
///
/// Starting from the complete forward-edge DAG, edges are drawn uniformly
/// without replacement and tentatively deleted. A deletion is kept only if
/// the resulting graph still has at most `x` initial and at most `y`
/// terminal vertices; otherwise the edge is restored. Every edge is tried
/// exactly once, so the run terminates after exactly `n(n-1)/2` iterations,
/// when the candidate pool is exhausted. There is no early exit on an exact
/// target hit; the mirror-image [`edge_add`](crate::process::edge_add) has
/// one, and the asymmetry is part of the processes' contract.
pub fn edge_remove<R: Rng>(x: usize, y: usize, n: usize, rng: &mut R) -> Result<Tdg> {
    validate_params(x, y, n)?;

    let mut g = Tdg::complete(n);
    let mut pool = EdgePool::forward(n);
    debug!(x, y, n, pool = pool.len(), "starting edge-remove process");

    while let Some((u, v)) = pool.draw(rng) {
        g.remove_edge(u, v);
        let exterior = exterior_vertices(&g);
        if exterior.initial.len() > x || exterior.terminal.len() > y {
            // Rejected: restore the edge. The candidate is gone from the
            // pool either way.
            g.add_edge(u, v);
        }
    }

    debug!(edges = g.edge_count(), "edge-remove process terminated");
    Ok(g)
}
