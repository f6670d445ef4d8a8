use tangle::{Edge, EdgeMap, Error, LayoutEngine, LayoutOptions, Node, NodeMap};

fn node_set(ids: &[&str]) -> NodeMap {
    ids.iter().map(|id| (id.to_string(), Node::new(*id))).collect()
}

fn edge_set(pairs: &[(&str, &str)]) -> EdgeMap {
    pairs
        .iter()
        .map(|(source, target)| {
            let edge = Edge::new(*source, *target);
            (edge.id.clone(), edge)
        })
        .collect()
}

fn coords(layout: &tangle::Layout, id: &str) -> (f64, f64) {
    let node = &layout.nodes[id];
    (node.x.unwrap(), node.y.unwrap())
}

fn chain() -> (NodeMap, EdgeMap) {
    (
        node_set(&["a", "b", "c"]),
        edge_set(&[("a", "b"), ("b", "c")]),
    )
}

#[test]
fn identical_update_skips_the_engine() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let opts = LayoutOptions::default();

    let first = engine.layout(&nodes, &edges, &opts).unwrap();
    let second = engine.layout(&nodes, &edges, &opts).unwrap();

    assert_eq!(engine.runs(), 2);
    assert_eq!(engine.trivial_runs(), 1);
    for id in ["a", "b", "c"] {
        assert_eq!(coords(&first, id), coords(&second, id));
    }
    assert_eq!(first.edges["a---b"].points, second.edges["a---b"].points);
    assert_eq!((first.width, first.height), (second.width, second.height));
}

#[test]
fn attribute_change_keeps_positions() {
    let mut engine = LayoutEngine::new();
    let (mut nodes, edges) = chain();
    let opts = LayoutOptions::default();

    let first = engine.layout(&nodes, &edges, &opts).unwrap();
    nodes["b"].label = Some("renamed".to_string());
    let second = engine.layout(&nodes, &edges, &opts).unwrap();

    assert_eq!(engine.trivial_runs(), 1);
    assert_eq!(coords(&first, "b"), coords(&second, "b"));
    assert_eq!(second.nodes["b"].label.as_deref(), Some("renamed"));
}

#[test]
fn removal_and_re_add_round_trip_through_the_cache() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let opts = LayoutOptions::default();

    let first = engine.layout(&nodes, &edges, &opts).unwrap();

    // Dropping "c" is trivial; the remaining nodes keep their spots.
    let trimmed = engine
        .layout(&node_set(&["a", "b"]), &edge_set(&[("a", "b")]), &opts)
        .unwrap();
    assert_eq!(engine.trivial_runs(), 1);
    assert!(!trimmed.nodes.contains_key("c"));
    assert_eq!(coords(&first, "a"), coords(&trimmed, "a"));

    // Re-adding "c" is still trivial and it lands where it used to be.
    let restored = engine.layout(&nodes, &edges, &opts).unwrap();
    assert_eq!(engine.trivial_runs(), 2);
    assert_eq!(coords(&first, "c"), coords(&restored, "c"));
    assert_eq!(first.edges["b---c"].points, restored.edges["b---c"].points);
}

#[test]
fn new_edge_between_seen_nodes_gets_a_straight_line() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let opts = LayoutOptions::default();

    let first = engine.layout(&nodes, &edges, &opts).unwrap();

    let mut more_edges = edges.clone();
    let shortcut = Edge::new("a", "c");
    more_edges.insert(shortcut.id.clone(), shortcut);
    let second = engine.layout(&nodes, &more_edges, &opts).unwrap();

    assert_eq!(engine.trivial_runs(), 1);
    let points = &second.edges["a---c"].points;
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].x, points[0].y), coords(&first, "a"));
    assert_eq!((points[1].x, points[1].y), coords(&first, "c"));
}

#[test]
fn new_edge_to_a_removed_node_is_rejected_on_the_trivial_path() {
    let mut engine = LayoutEngine::new();
    let opts = LayoutOptions::default();
    engine
        .layout(&node_set(&["a", "b", "c"]), &edge_set(&[("a", "b")]), &opts)
        .unwrap();

    // "c" left the node set but is still in the cumulative cache; a new
    // edge pointing at it must not be routed to its stale coordinates.
    let err = engine
        .layout(
            &node_set(&["a", "b"]),
            &edge_set(&[("a", "b"), ("b", "c")]),
            &opts,
        )
        .unwrap_err();

    assert_eq!(engine.trivial_runs(), 1);
    match err {
        Error::MissingEndpoint { edge_id, node_id } => {
            assert_eq!(edge_id, "b---c");
            assert_eq!(node_id, "c");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cached_edge_to_a_removed_node_is_rejected_on_the_trivial_path() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let opts = LayoutOptions::default();

    engine.layout(&nodes, &edges, &opts).unwrap();

    // Same edge set, but "c" is gone: the cached b---c polyline still ends
    // on "c", and reusing it would reference a node the caller no longer has.
    let err = engine
        .layout(&node_set(&["a", "b"]), &edges, &opts)
        .unwrap_err();

    assert_eq!(engine.trivial_runs(), 1);
    match err {
        Error::MissingEndpoint { node_id, .. } => assert_eq!(node_id, "c"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unseen_node_forces_a_full_run() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let opts = LayoutOptions::default();

    engine.layout(&nodes, &edges, &opts).unwrap();
    engine
        .layout(&node_set(&["a", "b", "c", "d"]), &edges, &opts)
        .unwrap();

    assert_eq!(engine.runs(), 2);
    assert_eq!(engine.trivial_runs(), 0);
}

#[test]
fn node_cache_override_forces_a_full_run() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();

    engine.layout(&nodes, &edges, &LayoutOptions::default()).unwrap();
    let opts = LayoutOptions {
        node_cache: Some(NodeMap::new()),
        ..Default::default()
    };
    engine.layout(&nodes, &edges, &opts).unwrap();

    assert_eq!(engine.trivial_runs(), 0);
}

#[test]
fn topologies_are_cached_independently() {
    let mut engine = LayoutEngine::new();
    let (nodes, edges) = chain();
    let processes = LayoutOptions {
        topology_id: "processes".to_string(),
        ..Default::default()
    };
    let containers = LayoutOptions {
        topology_id: "containers".to_string(),
        ..Default::default()
    };

    let first = engine.layout(&nodes, &edges, &processes).unwrap();
    // A different topology with overlapping ids starts from a cold cache.
    let other = engine
        .layout(&node_set(&["a"]), &EdgeMap::new(), &containers)
        .unwrap();
    assert_eq!(engine.trivial_runs(), 0);
    assert_ne!(coords(&first, "a"), coords(&other, "a"));

    // The original topology is untouched by the other one's run.
    let again = engine.layout(&nodes, &edges, &processes).unwrap();
    assert_eq!(engine.trivial_runs(), 1);
    assert_eq!(coords(&first, "a"), coords(&again, "a"));
}
