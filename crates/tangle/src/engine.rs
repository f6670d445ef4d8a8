//! The incremental layout controller.
//!
//! One cache slot per topology id keeps renderings of the same topology
//! similar across updates: a persistent layout graph for incremental engine
//! runs, plus cumulative node and edge caches. When an update brings no nodes
//! the cache has not seen before, the previous layout is reused and only
//! adjusted, skipping the engine entirely.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::center::shift_layout_to_center;
use crate::error::{Error, Result};
use crate::layered::LayoutGraph;
use crate::model::{Edge, EdgeMap, Layout, NodeMap, update_node_degrees};
use crate::options::LayoutOptions;
use crate::runner::run_layout_engine;
use crate::single_nodes::layout_single_nodes;

#[derive(Default)]
struct TopologyCache {
    graph: LayoutGraph,
    node_cache: NodeMap,
    edge_cache: EdgeMap,
    cached_layout: Option<Layout>,
}

/// Stateful layout engine with one cache slot per topology id.
#[derive(Default)]
pub struct LayoutEngine {
    caches: FxHashMap<String, TopologyCache>,
    runs: u64,
    trivial_runs: u64,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out the given node and edge sets.
    ///
    /// If the topology's cache slot holds a previous layout and every node id
    /// has been seen before, the cached layout is adjusted in place (removed
    /// nodes drop out, re-added nodes regain their cached coordinates).
    /// Otherwise the full pipeline runs: degree annotation, the layered
    /// engine, single-node grid placement and viewport centering.
    pub fn layout(
        &mut self,
        nodes: &NodeMap,
        edges: &EdgeMap,
        opts: &LayoutOptions,
    ) -> Result<Layout> {
        self.runs += 1;
        let cache = self.caches.entry(opts.topology_id.clone()).or_default();

        let node_cache = opts.node_cache.as_ref().unwrap_or(&cache.node_cache);
        let edge_cache = opts.edge_cache.as_ref().unwrap_or(&cache.edge_cache);
        let cached = opts.cached_layout.as_ref().or(cache.cached_layout.as_ref());

        let layout = match cached {
            Some(cached) if !has_unseen_nodes(nodes, node_cache) => {
                self.trivial_runs += 1;
                debug!(
                    trivial_runs = self.trivial_runs,
                    runs = self.runs,
                    "skip layout, trivial adjustment"
                );
                let mut layout = cached.clone();
                layout.nodes = nodes.clone();
                layout.edges = edges.clone();
                copy_layout_properties(&mut layout, node_cache, edge_cache)?;
                layout
            }
            _ => {
                let nodes = update_node_degrees(nodes, edges);
                let mut layout = run_layout_engine(&mut cache.graph, &nodes, edges, opts)?;
                layout_single_nodes(&mut layout, opts);
                shift_layout_to_center(&mut layout, opts);
                layout
            }
        };

        // Merge, not replace: nodes absent from this update keep their cached
        // coordinates so a later re-add lands them where they were.
        cache.cached_layout = Some(layout.clone());
        for (id, node) in &layout.nodes {
            cache.node_cache.insert(id.clone(), node.clone());
        }
        for (id, edge) in &layout.edges {
            cache.edge_cache.insert(id.clone(), edge.clone());
        }

        Ok(layout)
    }

    /// Total number of layout calls.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// How many of those were answered from the cache.
    pub fn trivial_runs(&self) -> u64 {
        self.trivial_runs
    }
}

/// True if `nodes` contains an id the cache has never seen.
fn has_unseen_nodes(nodes: &NodeMap, cache: &NodeMap) -> bool {
    let unseen: Vec<&str> = nodes
        .keys()
        .filter(|id| !cache.contains_key(*id))
        .map(String::as_str)
        .collect();
    if unseen.is_empty() {
        false
    } else {
        debug!(?unseen, "unseen nodes");
        true
    }
}

/// Copies cached coordinates onto the new node set, then settles every edge:
/// cached points are reused when both endpoints still sit where the cached
/// polyline expects them, anything else gets a straight line.
fn copy_layout_properties(
    layout: &mut Layout,
    node_cache: &NodeMap,
    edge_cache: &EdgeMap,
) -> Result<()> {
    for node in layout.nodes.values_mut() {
        if let Some(cached) = node_cache.get(&node.id) {
            node.x = cached.x;
            node.y = cached.y;
        }
    }

    let nodes = &layout.nodes;
    for edge in layout.edges.values_mut() {
        let cached = edge_cache.get(&edge.id);
        let reuse = match cached {
            Some(cached) => has_same_endpoints(cached, nodes)?,
            None => false,
        };
        if let (true, Some(cached)) = (reuse, cached) {
            edge.points = cached.points.clone();
        } else {
            set_simple_edge_points(edge, nodes)?;
        }
    }
    Ok(())
}

/// True if the cached polyline still starts and ends on the endpoint node
/// centers.
fn has_same_endpoints(cached: &Edge, nodes: &NodeMap) -> Result<bool> {
    let source = nodes.get(&cached.source).ok_or_else(|| Error::MissingEndpoint {
        edge_id: cached.id.clone(),
        node_id: cached.source.clone(),
    })?;
    let target = nodes.get(&cached.target).ok_or_else(|| Error::MissingEndpoint {
        edge_id: cached.id.clone(),
        node_id: cached.target.clone(),
    })?;
    let (Some(first), Some(last)) = (cached.points.first(), cached.points.last()) else {
        return Ok(false);
    };
    Ok(source.x == Some(first.x)
        && source.y == Some(first.y)
        && target.x == Some(last.x)
        && target.y == Some(last.y))
}

/// Straight two-point line between the endpoint coordinates in the current
/// node set. An endpoint that left the node set is an error; the cumulative
/// node cache still knows where it was, but routing to it would hand the
/// caller a dangling edge.
fn set_simple_edge_points(edge: &mut Edge, nodes: &NodeMap) -> Result<()> {
    let source = nodes.get(&edge.source).ok_or_else(|| Error::MissingEndpoint {
        edge_id: edge.id.clone(),
        node_id: edge.source.clone(),
    })?;
    let target = nodes.get(&edge.target).ok_or_else(|| Error::MissingEndpoint {
        edge_id: edge.id.clone(),
        node_id: edge.target.clone(),
    })?;
    let (Some(sx), Some(sy), Some(tx), Some(ty)) = (source.x, source.y, target.x, target.y) else {
        return Ok(());
    };
    edge.points = vec![
        crate::model::Point { x: sx, y: sy },
        crate::model::Point { x: tx, y: ty },
    ];
    Ok(())
}
