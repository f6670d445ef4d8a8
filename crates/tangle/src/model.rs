//! Caller-facing data model: nodes, edges and layout results.
//!
//! Node and edge sets cross the engine boundary as insertion-ordered maps; a
//! "new" node replaces rather than mutates an old one when merged into the
//! caches.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Joins node ids into an edge id. Disjoint from valid node-id characters so
/// edge ids can be split back into their endpoints.
pub const EDGE_ID_SEPARATOR: &str = "---";

/// Derived identity of the edge `source -> target`.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("{source}{EDGE_ID_SEPARATOR}{target}")
}

pub type NodeMap = IndexMap<String, Node>;
pub type EdgeMap = IndexMap<String, Edge>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Display payload, opaque to the engine.
    pub label: Option<String>,
    /// Upstream ordering hint; isolated nodes are gridded in ascending rank.
    pub rank: Option<String>,
    /// Count of incident edges, derived by [`update_node_degrees`].
    pub degree: Option<usize>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Polyline from the source node center to the target node center. The
    /// first and last points always equal the endpoint node coordinates;
    /// interior points are the layout algorithm's bend points.
    pub points: Vec<Point>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            points: Vec::new(),
        }
    }
}

/// A fully positioned topology: every node has coordinates and every edge a
/// polyline of at least two points whose endpoints exist in `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: NodeMap,
    pub edges: EdgeMap,
    pub width: f64,
    pub height: f64,
}

/// Annotates every node with its degree in the given edge set. A self-loop
/// counts once.
pub fn update_node_degrees(nodes: &NodeMap, edges: &EdgeMap) -> NodeMap {
    nodes
        .iter()
        .map(|(id, node)| {
            let degree = edges
                .values()
                .filter(|e| e.source == *id || e.target == *id)
                .count();
            let mut node = node.clone();
            node.degree = Some(degree);
            (id.clone(), node)
        })
        .collect()
}
