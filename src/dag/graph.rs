// src/dag/graph.rs

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

/// Directed acyclic graph on vertices `{0, …, n-1}` with forward edges only.
///
/// Every edge points from a lower to a higher vertex index, so the graph is
/// acyclic by construction: both mutation processes start from a subset of
/// the complete upper-triangular edge set and only remove or re-add edges
/// within that universe. All `n` vertices are always present, including
/// isolated ones.
#[derive(Debug, Clone)]
pub struct Tdg {
    order: usize,
    graph: DiGraphMap<usize, ()>,
}

impl Tdg {
    /// The empty graph: `n` isolated vertices, no edges.
    pub fn empty(order: usize) -> Self {
        let mut graph = DiGraphMap::new();
        for v in 0..order {
            graph.add_node(v);
        }
        Self { order, graph }
    }

    /// The complete forward-edge DAG: all `n(n-1)/2` edges `(u, v)` with
    /// `u < v`.
    pub fn complete(order: usize) -> Self {
        let mut tdg = Self::empty(order);
        for u in 0..order {
            for v in (u + 1)..order {
                tdg.add_edge(u, v);
            }
        }
        tdg
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges currently present.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert the forward edge `(u, v)`. Idempotent.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < v && v < self.order, "edge ({u}, {v}) is not forward");
        self.graph.add_edge(u, v, ());
    }

    /// Delete the edge `(u, v)` if present.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        self.graph.remove_edge(u, v);
    }

    /// Whether the edge `(u, v)` is present.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.graph.contains_edge(u, v)
    }

    /// Number of edges pointing into `v`.
    pub fn in_degree(&self, v: usize) -> usize {
        self.graph.neighbors_directed(v, Direction::Incoming).count()
    }

    /// Number of edges pointing out of `v`.
    pub fn out_degree(&self, v: usize) -> usize {
        self.graph.neighbors_directed(v, Direction::Outgoing).count()
    }

    /// Vertices in ascending index order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.order
    }

    /// Length in edges of a longest directed path.
    ///
    /// Returns 0 for a graph with no edges.
    pub fn longest_path_len(&self) -> usize {
        let order = match toposort(&self.graph, None) {
            Ok(order) => order,
            // Forward edges cannot form a cycle.
            Err(_) => return 0,
        };

        let mut dist = vec![0usize; self.order];
        let mut best = 0usize;
        for v in order {
            for u in self.graph.neighbors_directed(v, Direction::Incoming) {
                dist[v] = dist[v].max(dist[u] + 1);
            }
            best = best.max(dist[v]);
        }
        best
    }
}
