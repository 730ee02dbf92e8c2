use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use simdag::dag::{exterior_vertices, is_xy_tdg};
use simdag::process::{edge_add, edge_remove};

// Strategy for valid process parameters: targets in 1..=4 and a vertex
// count at least max(x, y), padded by up to 6 extra vertices to keep the
// n(n-1)/2 iteration bound small.
fn params() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..=4, 1usize..=4, 0usize..=6).prop_map(|(x, y, extra)| {
        let n = x.max(y) + extra;
        (x, y, n)
    })
}

proptest! {
    #[test]
    fn edge_remove_terminates_within_bounds((x, y, n) in params(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let g = edge_remove(x, y, n, &mut rng).unwrap();
        let ext = exterior_vertices(&g);
        prop_assert!(ext.initial.len() <= x);
        prop_assert!(ext.terminal.len() <= y);
        prop_assert_eq!(g.order(), n);
        prop_assert!(g.edge_count() <= n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn edge_add_terminates_above_bounds((x, y, n) in params(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let g = edge_add(x, y, n, &mut rng).unwrap();
        let ext = exterior_vertices(&g);
        prop_assert!(ext.initial.len() >= x);
        prop_assert!(ext.terminal.len() >= y);
    }

    #[test]
    fn exact_match_checks_agree_with_the_classifier((x, y, n) in params(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let g = edge_add(x, y, n, &mut rng).unwrap();
        let ext = exterior_vertices(&g);
        let exact = ext.initial.len() == x && ext.terminal.len() == y;
        prop_assert_eq!(is_xy_tdg(&g, x, y), exact);
    }

    #[test]
    fn same_seed_reproduces_the_same_graph((x, y, n) in params(), seed in any::<u64>()) {
        let mut rng_a = SmallRng::seed_from_u64(seed);
        let mut rng_b = SmallRng::seed_from_u64(seed);
        let a = edge_remove(x, y, n, &mut rng_a).unwrap();
        let b = edge_remove(x, y, n, &mut rng_b).unwrap();
        prop_assert_eq!(a.edge_count(), b.edge_count());
        for u in 0..n {
            for v in (u + 1)..n {
                prop_assert_eq!(a.contains_edge(u, v), b.contains_edge(u, v));
            }
        }
    }
}
