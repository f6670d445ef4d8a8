//! Feedback arc marking. The layered phases need a DAG; instead of reversing
//! feedback edges in place (which would collide with an existing opposite
//! edge in a simple graph), they are flagged and skipped by ranking,
//! normalization and ordering, then routed as plain straight lines.

use rustc_hash::FxHashSet;
use tangle_graphlib::EdgeKey;

use super::LayoutGraph;

pub(crate) fn mark_feedback(g: &mut LayoutGraph) {
    // Clear flags from the previous run; the edge set may have changed.
    for key in g.edge_keys() {
        if let Some(label) = g.edge_mut_by_key(&key) {
            label.feedback = false;
        }
    }

    let fas = dfs_fas(g);
    for key in fas {
        if let Some(label) = g.edge_mut_by_key(&key) {
            label.feedback = true;
        }
    }
}

/// DFS feedback arc set over nodes in insertion order. Self-loops stay out of
/// the set since flagging one cannot make the graph acyclic.
fn dfs_fas(g: &LayoutGraph) -> Vec<EdgeKey> {
    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack: FxHashSet<String> = FxHashSet::default();

    fn dfs(
        g: &LayoutGraph,
        v: &str,
        visited: &mut FxHashSet<String>,
        stack: &mut FxHashSet<String>,
        fas: &mut Vec<EdgeKey>,
    ) {
        if !visited.insert(v.to_string()) {
            return;
        }
        stack.insert(v.to_string());
        for e in g.out_edges(v) {
            if e.is_self_loop() {
                continue;
            }
            if stack.contains(&e.w) {
                fas.push(e);
            } else {
                dfs(g, &e.w, visited, stack, fas);
            }
        }
        stack.remove(v);
    }

    for v in g.node_ids() {
        dfs(g, &v, &mut visited, &mut stack, &mut fas);
    }
    fas
}

#[cfg(test)]
mod tests {
    use super::super::{EdgeLabel, NodeLabel};
    use super::*;

    #[test]
    fn marks_back_edges_in_a_cycle() {
        let mut g = LayoutGraph::new();
        for id in ["a", "b", "c"] {
            g.set_node(id, NodeLabel::default());
        }
        g.set_edge("a", "b", EdgeLabel::default());
        g.set_edge("b", "c", EdgeLabel::default());
        g.set_edge("c", "a", EdgeLabel::default());

        mark_feedback(&mut g);

        assert!(!g.edge("a", "b").unwrap().feedback);
        assert!(!g.edge("b", "c").unwrap().feedback);
        assert!(g.edge("c", "a").unwrap().feedback);
    }

    #[test]
    fn leaves_self_loops_unmarked() {
        let mut g = LayoutGraph::new();
        g.set_node("a", NodeLabel::default());
        g.set_edge("a", "a", EdgeLabel::default());

        mark_feedback(&mut g);
        assert!(!g.edge("a", "a").unwrap().feedback);
    }

    #[test]
    fn clears_stale_flags() {
        let mut g = LayoutGraph::new();
        g.set_node("a", NodeLabel::default());
        g.set_node("b", NodeLabel::default());
        g.set_edge(
            "a",
            "b",
            EdgeLabel {
                feedback: true,
                ..Default::default()
            },
        );

        mark_feedback(&mut g);
        assert!(!g.edge("a", "b").unwrap().feedback);
    }
}
