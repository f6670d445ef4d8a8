//! Crossing reduction: alternating barycenter sweeps over the layer matrix.
//!
//! After normalization every active edge spans exactly one rank, so a layer's
//! relevant neighbors always sit in the adjacent layer. A fixed number of
//! sweeps keeps the result deterministic; sorts are stable, so ties preserve
//! the previous (initially insertion) order.

use rustc_hash::FxHashMap;

use super::{LayoutGraph, is_active, layer_matrix};

const SWEEPS: usize = 4;

pub(crate) fn order(g: &mut LayoutGraph) {
    let mut layers = layer_matrix(g);
    if layers.len() > 1 {
        for sweep in 0..SWEEPS {
            if sweep % 2 == 0 {
                for i in 1..layers.len() {
                    sort_layer(g, &mut layers, i, i - 1, true);
                }
            } else {
                for i in (0..layers.len() - 1).rev() {
                    sort_layer(g, &mut layers, i, i + 1, false);
                }
            }
        }
    }

    for layer in &layers {
        for (idx, id) in layer.iter().enumerate() {
            if let Some(label) = g.node_mut(id) {
                label.order = Some(idx);
            }
        }
    }
}

/// Reorders `layers[free]` by the barycenter of each node's neighbors in
/// `layers[fixed]`. Nodes without neighbors there keep their current slot.
fn sort_layer(g: &LayoutGraph, layers: &mut [Vec<String>], free: usize, fixed: usize, down: bool) {
    let pos: FxHashMap<&str, usize> = layers[fixed]
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut keyed: Vec<(f64, String)> = layers[free]
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let neighbors: Vec<usize> = if down {
                g.in_edges(id)
            } else {
                g.out_edges(id)
            }
            .into_iter()
            .filter(|e| is_active(g, e))
            .filter_map(|e| {
                let other = if down { e.v } else { e.w };
                pos.get(other.as_str()).copied()
            })
            .collect();

            let key = if neighbors.is_empty() {
                i as f64
            } else {
                neighbors.iter().sum::<usize>() as f64 / neighbors.len() as f64
            };
            (key, id.clone())
        })
        .collect();

    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    layers[free] = keyed.into_iter().map(|(_, id)| id).collect();
}
