//! Property tests for the traversal engine.
//!
//! These verify the algorithm-level guarantees over random graphs:
//! - DFS visits exactly the component reachable from the start vertex;
//! - DFS and BFS agree on the visited set;
//! - every run terminates within a step budget proportional to |V| + |E|;
//! - the discovery tree is a valid spanning forest of the reachable
//!   component;
//! - visited order is deterministic across reruns on an unchanged graph.

use std::collections::HashSet;

use proptest::prelude::*;

use stepwise_engine::{Advanced, TraversalEngine, Variant};
use stepwise_graph::{GraphStore, VertexId};

const MAX_VERTICES: usize = 10;

/// A random undirected graph: vertex count plus edge pairs by index.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..=n.saturating_mul(2));
        let start = 0..n;
        (Just(n), edges, start)
    })
}

fn build_store(n: usize, edges: &[(usize, usize)]) -> (GraphStore, Vec<VertexId>) {
    let mut store = GraphStore::new();
    let ids: Vec<VertexId> = (0..n)
        .filter_map(|i| store.add_vertex(format!("V{i}")).ok())
        .collect();
    for (i, j) in edges {
        if let (Some(u), Some(v)) = (ids.get(*i), ids.get(*j)) {
            // Self-loops are silently dropped by the store.
            store.add_edge(*u, *v).ok();
        }
    }
    (store, ids)
}

/// Drive a run from `start` to completion, bounded by `max_steps` advance
/// signals. Returns the visited order and whether the run finished.
fn run_traversal(
    store: &mut GraphStore,
    variant: Variant,
    start: VertexId,
    max_steps: usize,
) -> (Vec<VertexId>, bool) {
    let mut engine = TraversalEngine::new(variant);
    let mut finished = false;

    if engine.advance(store).is_err() || engine.select(store, Some(start)).is_err() {
        return (Vec::new(), false);
    }
    for _ in 0..max_steps {
        match engine.advance(store) {
            Ok(Advanced::Finished) => {
                finished = true;
                break;
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
    (engine.visited().to_vec(), finished)
}

/// Drive a run and hand back the engine itself (for tree inspection).
fn run_and_keep_engine(
    store: &mut GraphStore,
    variant: Variant,
    start: VertexId,
    max_steps: usize,
) -> TraversalEngine {
    let mut engine = TraversalEngine::new(variant);
    engine.advance(store).ok();
    engine.select(store, Some(start)).ok();
    for _ in 0..max_steps {
        if !matches!(engine.advance(store), Ok(Advanced::Step(_))) {
            break;
        }
    }
    engine
}

/// Reference reachability closure, independent of the engine.
fn reachable_from(store: &GraphStore, start: VertexId) -> HashSet<VertexId> {
    let mut seen = HashSet::from([start]);
    let mut pending = vec![start];
    while let Some(v) = pending.pop() {
        if let Ok(neighbors) = store.neighbors(v) {
            for n in neighbors {
                if seen.insert(*n) {
                    pending.push(*n);
                }
            }
        }
    }
    seen
}

fn step_budget(store: &GraphStore) -> usize {
    // Each vertex is visited once and retired once, plus the completion
    // tail; 4 * (|V| + |E|) + 8 comfortably over-approximates that.
    (store.len() + store.edges().count()) * 4 + 8
}

proptest! {
    #[test]
    fn dfs_visits_exactly_the_reachable_component(
        (n, edges, start) in graph_strategy()
    ) {
        let (mut store, ids) = build_store(n, &edges);
        let start = ids[start];
        let expected = reachable_from(&store, start);
        let budget = step_budget(&store);

        let (visited, finished) = run_traversal(&mut store, Variant::Dfs, start, budget);

        prop_assert!(finished, "DFS must terminate within the step budget");
        let visited: HashSet<VertexId> = visited.into_iter().collect();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn bfs_and_dfs_agree_on_the_visited_set(
        (n, edges, start) in graph_strategy()
    ) {
        let (mut store, ids) = build_store(n, &edges);
        let start = ids[start];
        let budget = step_budget(&store);

        let (dfs, dfs_done) = run_traversal(&mut store, Variant::Dfs, start, budget);
        let (bfs, bfs_done) = run_traversal(&mut store, Variant::Bfs, start, budget);

        prop_assert!(dfs_done && bfs_done);
        let dfs: HashSet<VertexId> = dfs.into_iter().collect();
        let bfs: HashSet<VertexId> = bfs.into_iter().collect();
        prop_assert_eq!(dfs, bfs);
    }

    #[test]
    fn discovery_tree_is_a_spanning_forest_of_the_component(
        (n, edges, start) in graph_strategy()
    ) {
        let (mut store, ids) = build_store(n, &edges);
        let start = ids[start];
        let budget = step_budget(&store);

        let engine = run_and_keep_engine(&mut store, Variant::Tree, start, budget);
        let visited = engine.visited().to_vec();
        let tree = engine.discovery_tree();

        // Every visited vertex except the root has exactly one parent,
        // and that parent was visited strictly before it.
        prop_assert_eq!(tree.len(), visited.len().saturating_sub(1));
        for (position, child) in visited.iter().enumerate().skip(1) {
            let parent = tree.parent_of(*child);
            prop_assert!(parent.is_some());
            let parent_pos = visited.iter().position(|v| Some(*v) == parent);
            prop_assert!(matches!(parent_pos, Some(p) if p < position));
            // Tree edges are real graph edges.
            if let Some(parent) = parent {
                prop_assert!(store.has_edge(parent, *child));
            }
        }
        prop_assert_eq!(tree.parent_of(start), None);
    }

    #[test]
    fn visited_order_is_deterministic_after_reset(
        (n, edges, start) in graph_strategy()
    ) {
        let (mut store, ids) = build_store(n, &edges);
        let start = ids[start];
        let budget = step_budget(&store);

        let (first, first_done) = run_traversal(&mut store, Variant::Dfs, start, budget);
        // The terminal advance already cleared marks; reset again to be
        // explicit about the precondition.
        store.reset_marks();
        let (second, second_done) = run_traversal(&mut store, Variant::Dfs, start, budget);

        prop_assert!(first_done && second_done);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn runs_leave_no_marks_behind(
        (n, edges, start) in graph_strategy()
    ) {
        let (mut store, ids) = build_store(n, &edges);
        let start = ids[start];
        let budget = step_budget(&store);

        for variant in [Variant::Dfs, Variant::Bfs, Variant::Tree] {
            let (_, finished) = run_traversal(&mut store, variant, start, budget);
            prop_assert!(finished);
            prop_assert!(store.marked_vertices().is_empty());
        }
    }
}
