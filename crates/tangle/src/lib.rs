//! Incremental layout engine for node-edge topology views.
//!
//! The entry point is [`LayoutEngine::layout`]: give it the current node and
//! edge sets plus [`LayoutOptions`] and it returns a [`Layout`] with node
//! center coordinates, edge polylines and overall dimensions. Connected nodes
//! go through a layered (rank and order) algorithm, zero-degree nodes are
//! packed into a square grid beside it, and the result is centered in the
//! target viewport.
//!
//! The engine is stateful on purpose. Each topology id gets its own cache
//! slot, and an update whose node ids were all seen before is answered by
//! adjusting the previous layout instead of re-running the engine, so
//! successive renderings of the same topology stay visually stable.
//!
//! ```
//! use tangle::{Edge, LayoutEngine, LayoutOptions, Node};
//!
//! let mut engine = LayoutEngine::new();
//! let nodes = [Node::new("a"), Node::new("b")]
//!     .into_iter()
//!     .map(|n| (n.id.clone(), n))
//!     .collect();
//! let edge = Edge::new("a", "b");
//! let edges = [(edge.id.clone(), edge)].into_iter().collect();
//!
//! let layout = engine.layout(&nodes, &edges, &LayoutOptions::default())?;
//! assert!(layout.nodes["a"].y < layout.nodes["b"].y);
//! # Ok::<(), tangle::Error>(())
//! ```

#![forbid(unsafe_code)]

mod center;
mod engine;
mod error;
mod layered;
mod model;
mod options;
mod runner;
mod single_nodes;

pub use engine::LayoutEngine;
pub use error::{Error, Result};
pub use model::{
    EDGE_ID_SEPARATOR, Edge, EdgeMap, Layout, Node, NodeMap, Point, edge_id, update_node_degrees,
};
pub use options::{
    DEFAULT_WIDTH, LayoutOptions, Margins, NODE_SEPARATION_FACTOR, NODE_SIZE_FACTOR,
    RANK_SEPARATION_FACTOR,
};
pub use runner::MAX_NODES;
