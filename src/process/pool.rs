// src/process/pool.rs

use rand::Rng;

/// Without-replacement uniform sampler over a candidate-edge set.
///
/// Each draw removes the chosen edge permanently, whether the caller ends up
/// accepting or rejecting the mutation, so the pool strictly shrinks every
/// iteration and a process run is bounded by the initial pool size.
#[derive(Debug, Clone)]
pub struct EdgePool {
    edges: Vec<(usize, usize)>,
}

impl EdgePool {
    /// The full forward-edge universe on `n` vertices: all `n(n-1)/2` pairs
    /// `(u, v)` with `u < v`.
    pub fn forward(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u, v));
            }
        }
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Draw one edge uniformly at random, removing it from the pool.
    ///
    /// Returns `None` once the pool is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.edges.is_empty() {
            return None;
        }
        let k = rng.gen_range(0..self.edges.len());
        Some(self.edges.swap_remove(k))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn forward_pool_has_triangular_size() {
        assert_eq!(EdgePool::forward(0).len(), 0);
        assert_eq!(EdgePool::forward(1).len(), 0);
        assert_eq!(EdgePool::forward(2).len(), 1);
        assert_eq!(EdgePool::forward(6).len(), 15);
    }

    #[test]
    fn draw_yields_every_edge_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pool = EdgePool::forward(5);
        let mut seen = Vec::new();
        while let Some(edge) = pool.draw(&mut rng) {
            seen.push(edge);
        }
        assert!(pool.is_empty());
        assert_eq!(seen.len(), 10);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 10);
        for &(u, v) in &seen {
            assert!(u < v && v < 5);
        }
    }
}
