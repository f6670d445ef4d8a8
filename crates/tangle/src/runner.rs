//! Layered layout runner: reconciles the persistent layout graph with the
//! current node/edge sets, runs the layered algorithm and extracts node
//! coordinates and edge polylines.

use tracing::debug;

use crate::error::{Error, Result};
use crate::layered::{self, EdgeLabel, GraphLabel, LayoutGraph, NodeLabel};
use crate::model::{EdgeMap, Layout, NodeMap, edge_id};
use crate::options::LayoutOptions;

/// The layout engine declines topologies with more nodes than this.
pub const MAX_NODES: usize = 100;

/// Produces a full layout for the given (degree-annotated) node set, or
/// declines with [`Error::TooManyNodes`]. Zero-degree nodes pass through
/// without coordinates; they are placed separately.
pub(crate) fn run_layout_engine(
    graph: &mut LayoutGraph,
    nodes: &NodeMap,
    edges: &EdgeMap,
    opts: &LayoutOptions,
) -> Result<Layout> {
    if nodes.len() > MAX_NODES {
        debug!(
            count = nodes.len(),
            limit = MAX_NODES,
            "too many nodes for the graph layout engine"
        );
        return Err(Error::TooManyNodes {
            count: nodes.len(),
            limit: MAX_NODES,
        });
    }
    validate_endpoints(nodes, edges)?;

    let spacing = opts.spacing();
    graph.set_graph(GraphLabel {
        nodesep: spacing.nodesep,
        ranksep: spacing.ranksep,
        ..Default::default()
    });

    // Add nodes not already in the graph.
    for node in nodes.values() {
        if !graph.has_node(&node.id) {
            graph.set_node(
                &node.id,
                NodeLabel {
                    width: spacing.node_width,
                    height: spacing.node_height,
                    ..Default::default()
                },
            );
        }
    }

    // Remove nodes that are no longer there, and zero-degree nodes: the
    // layered algorithm ignores edgeless nodes, they are gridded separately.
    for id in graph.node_ids() {
        let keep = nodes.get(&id).is_some_and(|n| n.degree.unwrap_or(0) != 0);
        if !keep {
            graph.remove_node(&id);
        }
    }

    // Add edges not already in the graph.
    for edge in edges.values() {
        if !graph.has_edge(&edge.source, &edge.target) {
            graph.set_edge(
                &edge.source,
                &edge.target,
                EdgeLabel {
                    id: edge.id.clone(),
                    // One full rank even for self-loops, forcing visible
                    // routing instead of a zero-length loop.
                    minlen: 1,
                    ..Default::default()
                },
            );
        }
    }

    // Remove edges whose derived id is no longer in the edge set.
    for key in graph.edge_keys() {
        if !edges.contains_key(&edge_id(&key.v, &key.w)) {
            let _ = graph.remove_edge_key(&key);
        }
    }

    layered::run(graph);

    let mut out_nodes = nodes.clone();
    for id in graph.node_ids() {
        let Some((x, y)) = graph.node(&id).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };
        if let Some(node) = out_nodes.get_mut(&id) {
            node.x = Some(x);
            node.y = Some(y);
        }
    }

    let mut out_edges = edges.clone();
    for key in graph.edge_keys() {
        let Some(label) = graph.edge_by_key(&key) else {
            continue;
        };
        if let Some(edge) = out_edges.get_mut(&label.id) {
            edge.points = label.points.clone();
        }
    }
    clamp_endpoints(&mut out_edges, &out_nodes);

    Ok(Layout {
        nodes: out_nodes,
        edges: out_edges,
        width: graph.graph().width,
        height: graph.graph().height,
    })
}

pub(crate) fn validate_endpoints(nodes: &NodeMap, edges: &EdgeMap) -> Result<()> {
    for edge in edges.values() {
        for endpoint in [&edge.source, &edge.target] {
            if !nodes.contains_key(endpoint) {
                return Err(Error::MissingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Forces the first and last point of every polyline onto the endpoint node
/// centers, discarding the algorithm's bounding-box-aware endpoints so edges
/// terminate exactly where the view layer expects to clip them.
fn clamp_endpoints(edges: &mut EdgeMap, nodes: &NodeMap) {
    for edge in edges.values_mut() {
        let Some((sx, sy)) = nodes.get(&edge.source).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };
        let Some((tx, ty)) = nodes.get(&edge.target).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };
        if edge.points.len() < 2 {
            edge.points = vec![
                crate::model::Point { x: sx, y: sy },
                crate::model::Point { x: tx, y: ty },
            ];
        } else {
            edge.points[0] = crate::model::Point { x: sx, y: sy };
            let last = edge.points.len() - 1;
            edge.points[last] = crate::model::Point { x: tx, y: ty };
        }
    }
}
