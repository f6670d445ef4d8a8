use tangle_graphlib::{EdgeKey, Graph};

fn new_graph() -> Graph<u32, u32, ()> {
    Graph::new()
}

#[test]
fn set_node_creates_and_replaces() {
    let mut g = new_graph();
    g.set_node("a", 1);
    assert!(g.has_node("a"));
    assert_eq!(g.node("a"), Some(&1));

    g.set_node("a", 2);
    assert_eq!(g.node("a"), Some(&2));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn nodes_iterate_in_insertion_order() {
    let mut g = new_graph();
    g.set_node("b", 0);
    g.set_node("a", 0);
    g.set_node("c", 0);
    assert_eq!(g.node_ids(), vec!["b", "a", "c"]);
}

#[test]
fn set_edge_creates_missing_endpoints() {
    let mut g = new_graph();
    g.set_edge("a", "b", 7);
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.edge("a", "b"), Some(&7));
    assert!(!g.has_edge("b", "a"));
}

#[test]
fn remove_node_drops_incident_edges() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    assert_eq!(g.edge_count(), 2);

    assert!(g.remove_node("b"));
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_node("b"));
    assert!(g.has_node("a"));
    assert!(g.has_node("c"));
}

#[test]
fn remove_node_preserves_order_of_survivors() {
    let mut g = new_graph();
    g.set_node("a", 0);
    g.set_node("b", 0);
    g.set_node("c", 0);
    g.remove_node("b");
    assert_eq!(g.node_ids(), vec!["a", "c"]);

    // Re-added nodes land at the end.
    g.set_node("b", 0);
    assert_eq!(g.node_ids(), vec!["a", "c", "b"]);
}

#[test]
fn remove_edge_keeps_nodes() {
    let mut g = new_graph();
    g.set_edge("a", "b", 0);
    assert!(g.remove_edge("a", "b"));
    assert!(!g.remove_edge("a", "b"));
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
}

#[test]
fn adjacency_queries() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    g.set_edge("a", "c", 0);

    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.predecessors("c"), vec!["b", "a"]);
    assert_eq!(
        g.out_edges("a"),
        vec![EdgeKey::new("a", "b"), EdgeKey::new("a", "c")]
    );
    assert_eq!(g.in_edges("b"), vec![EdgeKey::new("a", "b")]);
}

#[test]
fn sources_ignore_self_loops() {
    let mut g = new_graph();
    g.set_edge("a", "a", 0);
    g.set_edge("a", "b", 0);
    assert_eq!(g.sources(), vec!["a"]);
}
