//! End-to-end scenarios driven through the session controller.
//!
//! Each test walks a full interactive session the way a user would:
//! build a graph, start a run, pick a vertex, press through the steps.

use stepwise_engine::Variant;
use stepwise_graph::{GraphStore, VertexId};
use stepwise_session::{SessionController, UiEvent};

fn controller_with(values: &[&str], edges: &[(&str, &str)]) -> SessionController {
    let mut store = GraphStore::new();
    for value in values {
        store.add_vertex(*value).ok();
    }
    for (a, b) in edges {
        let u = store.vertex_by_value(a).map(|v| v.id);
        let v = store.vertex_by_value(b).map(|v| v.id);
        if let (Some(u), Some(v)) = (u, v) {
            store.add_edge(u, v).ok();
        }
    }
    SessionController::with_store(store)
}

fn id_of(controller: &SessionController, value: &str) -> Option<VertexId> {
    controller.store().vertex_by_value(value).map(|v| v.id)
}

#[test]
fn dfs_walkthrough_over_a_path_graph() {
    // Vertices [A, B, C] in that order, edges A-B and B-C.
    let mut controller = controller_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let a = id_of(&controller, "A");

    controller.dispatch(UiEvent::Run(Variant::Dfs)).ok();
    assert_eq!(
        controller.narration(),
        Some("Single-click on vertex from which to start")
    );

    controller.dispatch(UiEvent::SelectVertex(a)).ok();
    assert_eq!(controller.narration(), Some("Start search from vertex A"));

    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(controller.narration(), Some("Visited vertex B"));

    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(controller.narration(), Some("Visited vertex C"));

    // C is a dead end; the stack pops back through B and A.
    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(
        controller.narration(),
        Some("Will check vertices adjacent to B")
    );
    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(
        controller.narration(),
        Some("Will check vertices adjacent to A")
    );
    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(
        controller.narration(),
        Some("No more vertices with unvisited neighbors")
    );

    controller.dispatch(UiEvent::Advance).ok();
    assert_eq!(controller.narration(), Some("Press again to reset search"));

    // The terminal advance clears the marks and ends the run.
    controller.dispatch(UiEvent::Advance).ok();
    assert!(!controller.has_active_run());
    assert!(controller.marked_vertices().is_empty());
}

#[test]
fn advance_while_awaiting_pick_changes_nothing() {
    let mut controller = controller_with(&["A"], &[]);

    controller.dispatch(UiEvent::Run(Variant::Dfs)).ok();
    let prompt = controller.narration().map(ToOwned::to_owned);

    controller.dispatch(UiEvent::Advance).ok();
    controller.dispatch(UiEvent::Advance).ok();

    assert!(controller.is_awaiting_pick());
    assert_eq!(controller.narration().map(ToOwned::to_owned), prompt);
}

#[test]
fn bfs_on_empty_store_with_null_selection_completes_quietly() {
    let mut controller = SessionController::new();

    controller.dispatch(UiEvent::Run(Variant::Bfs)).ok();
    let result = controller.dispatch(UiEvent::SelectVertex(None));

    assert!(result.is_ok());
    assert_eq!(controller.narration(), Some("ERROR: Item's not clicked."));
}

#[test]
fn bfs_visits_breadth_first_and_narrates_the_frontier() {
    let mut controller = controller_with(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("C", "D")],
    );
    let a = id_of(&controller, "A");

    controller.dispatch(UiEvent::Run(Variant::Bfs)).ok();
    controller.dispatch(UiEvent::SelectVertex(a)).ok();

    let mut narrations = Vec::new();
    for _ in 0..16 {
        if controller.dispatch(UiEvent::Advance).is_err() || !controller.has_active_run() {
            break;
        }
        if let Some(n) = controller.narration() {
            narrations.push(n.to_owned());
        }
    }

    let visits: Vec<&str> = narrations
        .iter()
        .filter_map(|n| n.strip_prefix("Visited vertex "))
        .collect();
    assert_eq!(visits, ["B", "C", "D"]);
    assert!(narrations
        .iter()
        .any(|n| n == "No more unvisited vertices adjacent to A"));
    assert!(!controller.has_active_run());
}

#[test]
fn tree_mode_walks_the_three_phase_tail() {
    let mut controller = controller_with(&["A", "B", "C"], &[("A", "B"), ("A", "C")]);
    let a = id_of(&controller, "A");

    controller.dispatch(UiEvent::Run(Variant::Tree)).ok();
    controller.dispatch(UiEvent::SelectVertex(a)).ok();
    assert!(controller.edge_marking_active());

    // Drive to the end of the three-phase tail.
    let mut saw_spanning_prompt = false;
    for _ in 0..16 {
        controller.dispatch(UiEvent::Advance).ok();
        if controller.narration() == Some("Minimum spanning tree; Press again to reset tree") {
            saw_spanning_prompt = true;
        }
        if !controller.has_active_run() {
            break;
        }
    }

    assert!(saw_spanning_prompt);
    assert!(controller.marked_vertices().is_empty());
}

#[test]
fn new_graph_requires_two_presses() {
    let mut controller = controller_with(&["A", "B"], &[("A", "B")]);

    controller.dispatch(UiEvent::NewGraph).ok();
    assert_eq!(
        controller.narration(),
        Some("ARE YOU SURE? Press again to clear old graph")
    );
    assert_eq!(controller.store().len(), 2);

    controller.dispatch(UiEvent::NewGraph).ok();
    assert!(controller.store().is_empty());
    assert_eq!(controller.store().edges().count(), 0);
}

#[test]
fn starting_a_run_disarms_a_pending_new_graph() {
    let mut controller = controller_with(&["A"], &[]);

    controller.dispatch(UiEvent::NewGraph).ok();
    controller.dispatch(UiEvent::Run(Variant::Dfs)).ok();
    controller.dispatch(UiEvent::NewGraph).ok();

    // Still armed-only: the graph survived.
    assert_eq!(controller.store().len(), 1);
}

#[test]
fn rerunning_after_reset_reproduces_the_visited_order() {
    let mut controller = controller_with(
        &["A", "B", "C", "D"],
        &[("A", "C"), ("A", "B"), ("B", "D"), ("C", "D")],
    );
    let a = id_of(&controller, "A");

    let mut orders = Vec::new();
    for _ in 0..2 {
        controller.dispatch(UiEvent::Run(Variant::Dfs)).ok();
        controller.dispatch(UiEvent::SelectVertex(a)).ok();
        let mut order = vec!["A".to_owned()];
        for _ in 0..24 {
            controller.dispatch(UiEvent::Advance).ok();
            if let Some(v) = controller
                .narration()
                .and_then(|n| n.strip_prefix("Visited vertex "))
            {
                order.push(v.to_owned());
            }
            if !controller.has_active_run() {
                break;
            }
        }
        orders.push(order);
    }

    assert_eq!(orders[0], orders[1]);
    // Insertion-order tie-break: A expands B before C even though the
    // A-C edge was inserted first.
    assert_eq!(orders[0].get(1).map(String::as_str), Some("B"));
}
