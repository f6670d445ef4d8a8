//! Layout configuration with documented defaults.

use serde::{Deserialize, Serialize};

use crate::model::{EdgeMap, Layout, NodeMap};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const NODE_SIZE_FACTOR: f64 = 1.0;
pub const NODE_SEPARATION_FACTOR: f64 = 2.5;
pub const RANK_SEPARATION_FACTOR: f64 = 2.5;

fn default_scale(value: f64) -> f64 {
    value * 2.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
}

/// Options for [`crate::LayoutEngine::layout`]. Unset fields fall back to the
/// defaults below; construct with struct-update syntax:
///
/// ```
/// use tangle::LayoutOptions;
///
/// let opts = LayoutOptions {
///     topology_id: "containers".into(),
///     width: 1200.0,
///     ..Default::default()
/// };
/// assert_eq!(opts.target_height(), 600.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Selects (or creates) the per-topology cache slot. Default `"noId"`.
    pub topology_id: String,
    /// Maps the logical spacing units to screen units. Default `x * 2`.
    pub scale: fn(f64) -> f64,
    /// Default zero.
    pub margins: Margins,
    /// Target viewport width for centering. Default 800.
    pub width: f64,
    /// Target viewport height for centering. Defaults to `width / 2`.
    pub height: Option<f64>,
    /// Overrides the cache slot's previous layout; primarily for tests.
    pub cached_layout: Option<Layout>,
    /// Overrides the cache slot's cumulative node cache; primarily for tests.
    pub node_cache: Option<NodeMap>,
    /// Overrides the cache slot's cumulative edge cache; primarily for tests.
    pub edge_cache: Option<EdgeMap>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            topology_id: "noId".to_string(),
            scale: default_scale,
            margins: Margins::default(),
            width: DEFAULT_WIDTH,
            height: None,
            cached_layout: None,
            node_cache: None,
            edge_cache: None,
        }
    }
}

impl LayoutOptions {
    pub fn target_height(&self) -> f64 {
        self.height.unwrap_or(self.width / 2.0)
    }

    pub(crate) fn spacing(&self) -> Spacing {
        let scale = self.scale;
        Spacing {
            nodesep: scale(NODE_SEPARATION_FACTOR),
            ranksep: scale(RANK_SEPARATION_FACTOR),
            node_width: scale(NODE_SIZE_FACTOR),
            node_height: scale(NODE_SIZE_FACTOR),
        }
    }
}

/// Geometry derived from the scale function and the logical spacing units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Spacing {
    pub nodesep: f64,
    pub ranksep: f64,
    pub node_width: f64,
    pub node_height: f64,
}
