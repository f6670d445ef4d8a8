//! Layered graph drawing, condensed to what a live topology view needs:
//! feedback-edge marking, longest-path ranking, dummy-chain normalization for
//! multi-rank edges, barycenter ordering and centered coordinate assignment.
//!
//! Operates on the persistent [`LayoutGraph`] owned by a topology cache slot;
//! every phase recomputes its outputs from scratch, but node and edge
//! insertion order carries over between runs, which keeps rank ordering and
//! in-layer ordering stable under incremental updates.

mod acyclic;
mod normalize;
mod order;
mod position;
mod rank;

use tangle_graphlib::{EdgeKey, Graph};

use crate::model::Point;

#[derive(Debug, Clone, Default)]
pub(crate) struct GraphLabel {
    pub nodesep: f64,
    pub ranksep: f64,
    /// Bounding size of the laid-out graph, written by the position phase.
    pub width: f64,
    pub height: f64,
    /// First dummy node of each chain created by the normalize phase.
    pub dummy_chains: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    pub dummy: bool,
    /// On the first dummy of a chain: the split edge's label and key.
    pub edge_label: Option<EdgeLabel>,
    pub edge_key: Option<EdgeKey>,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeLabel {
    /// Derived edge id of the topology edge this label belongs to.
    pub id: String,
    pub minlen: usize,
    /// Part of the feedback arc set; ignored by ranking and ordering.
    pub feedback: bool,
    pub points: Vec<Point>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            id: String::new(),
            minlen: 1,
            feedback: false,
            points: Vec::new(),
        }
    }
}

pub(crate) type LayoutGraph = Graph<NodeLabel, EdgeLabel, GraphLabel>;

/// Runs the full pipeline, leaving coordinates on node labels and polylines
/// on edge labels, and the bounding `width`/`height` on the graph label.
pub(crate) fn run(g: &mut LayoutGraph) {
    acyclic::mark_feedback(g);
    rank::longest_path(g);
    rank::normalize_ranks(g);
    normalize::run(g);
    order::order(g);
    position::position(g);
    edge_points(g);
    normalize::undo(g);
}

/// True for edges that constrain ranking and ordering.
pub(crate) fn is_active(g: &LayoutGraph, e: &EdgeKey) -> bool {
    !e.is_self_loop() && g.edge_by_key(e).is_some_and(|l| !l.feedback)
}

/// Nodes grouped by rank, each layer sorted by assigned order (stable, so
/// unordered layers keep graph insertion order).
pub(crate) fn layer_matrix(g: &LayoutGraph) -> Vec<Vec<String>> {
    let mut max_rank: Option<i32> = None;
    for id in g.node_ids() {
        if let Some(rank) = g.node(&id).and_then(|n| n.rank) {
            max_rank = Some(max_rank.map_or(rank, |m: i32| m.max(rank)));
        }
    }
    let Some(max_rank) = max_rank else {
        return Vec::new();
    };

    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank.max(0) as usize) + 1];
    for id in g.node_ids() {
        let Some(rank) = g.node(&id).and_then(|n| n.rank) else {
            continue;
        };
        if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
            layer.push(id);
        }
    }
    for layer in &mut layers {
        layer.sort_by_key(|id| g.node(id).and_then(|n| n.order).unwrap_or(0));
    }
    layers
}

/// Writes a polyline onto every real edge: a straight two-point line between
/// node centers, or a small loop beside the node for self-edges. Edges that
/// were split into dummy chains are reassembled with their bend points by
/// `normalize::undo`.
fn edge_points(g: &mut LayoutGraph) {
    let nodesep = g.graph().nodesep;
    for key in g.edge_keys() {
        let touches_dummy = [key.v.as_str(), key.w.as_str()]
            .iter()
            .any(|id| g.node(id).is_some_and(|n| n.dummy));
        if touches_dummy {
            continue;
        }

        let Some((sx, sy, sw, sh)) = g
            .node(&key.v)
            .and_then(|n| Some((n.x?, n.y?, n.width, n.height)))
        else {
            continue;
        };
        let Some((tx, ty)) = g.node(&key.w).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };

        let points = if key.is_self_loop() {
            // Rank constraints cannot express a self-edge; route a visible
            // loop beside the node instead of a zero-length line.
            let dx = sw / 2.0 + nodesep / 2.0;
            vec![
                Point { x: sx, y: sy },
                Point {
                    x: sx + dx,
                    y: sy - sh / 2.0,
                },
                Point {
                    x: sx + dx,
                    y: sy + sh / 2.0,
                },
                Point { x: sx, y: sy },
            ]
        } else {
            vec![Point { x: sx, y: sy }, Point { x: tx, y: ty }]
        };

        if let Some(label) = g.edge_mut_by_key(&key) {
            label.points = points;
        }
    }
}
