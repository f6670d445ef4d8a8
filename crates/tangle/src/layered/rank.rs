//! Longest-path rank assignment.

use rustc_hash::FxHashMap;

use super::{LayoutGraph, is_active};

/// Assigns every node a rank such that `rank(w) >= rank(v) + minlen` for each
/// active edge `v -> w`. Sinks end up at rank 0 and everything else below
/// zero; callers follow up with [`normalize_ranks`].
pub(crate) fn longest_path(g: &mut LayoutGraph) {
    fn dfs(v: &str, g: &mut LayoutGraph, visited: &mut FxHashMap<String, i32>) -> i32 {
        if let Some(&rank) = visited.get(v) {
            return rank;
        }

        let mut rank: Option<i32> = None;
        for e in g.out_edges(v) {
            if !is_active(g, &e) {
                continue;
            }
            let minlen = g.edge_by_key(&e).map(|l| l.minlen as i32).unwrap_or(1);
            let candidate = dfs(&e.w, g, visited) - minlen;
            rank = Some(match rank {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }

        let rank = rank.unwrap_or(0);
        if let Some(label) = g.node_mut(v) {
            label.rank = Some(rank);
        }
        visited.insert(v.to_string(), rank);
        rank
    }

    let mut visited: FxHashMap<String, i32> = FxHashMap::default();
    for v in active_sources(g) {
        dfs(&v, g, &mut visited);
    }
    // Nodes only reachable through feedback edges still need a rank.
    for v in g.node_ids() {
        if !visited.contains_key(&v) {
            dfs(&v, g, &mut visited);
        }
    }
}

/// Nodes with no incoming active edge, in insertion order.
fn active_sources(g: &LayoutGraph) -> Vec<String> {
    g.node_ids()
        .into_iter()
        .filter(|v| !g.in_edges(v).iter().any(|e| is_active(g, e)))
        .collect()
}

/// Shifts ranks so the smallest becomes zero.
pub(crate) fn normalize_ranks(g: &mut LayoutGraph) {
    let mut min_rank = i32::MAX;
    for v in g.node_ids() {
        if let Some(rank) = g.node(&v).and_then(|n| n.rank) {
            min_rank = min_rank.min(rank);
        }
    }
    if min_rank == i32::MAX {
        return;
    }
    for v in g.node_ids() {
        if let Some(label) = g.node_mut(&v) {
            if let Some(rank) = label.rank {
                label.rank = Some(rank - min_rank);
            }
        }
    }
}
