//! Grid placement for zero-degree nodes.
//!
//! The layered algorithm only positions connected nodes; everything with
//! degree zero is packed into a near-square grid next to the layered result.
//! The grid goes to the right of a tall layout and below a wide one, so the
//! combined drawing tends back towards the viewport's aspect ratio.

use tracing::debug;

use crate::model::Layout;
use crate::options::LayoutOptions;

pub(crate) fn layout_single_nodes(layout: &mut Layout, opts: &LayoutOptions) {
    let spacing = opts.spacing();
    let nodesep = spacing.nodesep;
    // The layered pass spends half the rank gap on either side of an edge;
    // the grid packs at that denser pitch.
    let ranksep = spacing.ranksep / 2.0;
    let node_width = spacing.node_width;
    let node_height = spacing.node_height;
    let aspect_ratio = if layout.height != 0.0 {
        layout.width / layout.height
    } else {
        1.0
    };

    let single_count = layout
        .nodes
        .values()
        .filter(|n| n.degree.unwrap_or(0) == 0)
        .count();
    if single_count == 0 {
        return;
    }

    let connected = || {
        layout
            .nodes
            .values()
            .filter(|n| n.degree.unwrap_or(0) != 0)
            .filter_map(|n| Some((n.x?, n.y?)))
    };

    let mut offset: Option<(f64, f64)> = None;
    if connected().next().is_some() {
        if aspect_ratio < 1.0 {
            debug!(aspect_ratio, "laying out single nodes to the right");
            let x = connected().map(|(x, _)| x).fold(f64::MIN, f64::max);
            let y = connected().map(|(_, y)| y).fold(f64::MAX, f64::min);
            offset = Some((x + node_width + nodesep, y));
        } else {
            debug!(aspect_ratio, "laying out single nodes below");
            let x = connected().map(|(x, _)| x).fold(f64::MAX, f64::min);
            let y = connected().map(|(_, y)| y).fold(f64::MIN, f64::max);
            offset = Some((x, y + node_height + ranksep));
        }
    }
    let (offset_x, offset_y) =
        offset.unwrap_or((opts.margins.left + node_width / 2.0, opts.margins.top + node_height / 2.0));

    // Fill row-major, rank order deciding which node gets which cell.
    let mut single_ids: Vec<String> = layout
        .nodes
        .values()
        .filter(|n| n.degree.unwrap_or(0) == 0)
        .map(|n| n.id.clone())
        .collect();
    single_ids.sort_by_key(|id| {
        let rank = layout.nodes.get(id).and_then(|n| n.rank.clone());
        (rank.is_none(), rank)
    });

    let columns = (single_count as f64).sqrt().ceil() as usize;
    let mut row = 0usize;
    let mut col = 0usize;
    let mut single_x = offset_x;
    let mut single_y = offset_y;
    for id in &single_ids {
        if col == columns {
            col = 0;
            row += 1;
        }
        single_x = col as f64 * (nodesep + node_width) + offset_x;
        single_y = row as f64 * (ranksep + node_height) + offset_y;
        col += 1;
        if let Some(node) = layout.nodes.get_mut(id) {
            node.x = Some(single_x);
            node.y = Some(single_y);
        }
    }

    // Grow the dimensions past the last cell placed, matching the layered
    // pass's habit of leaving a separation-sized border implicit.
    layout.width = layout.width.max(single_x + node_width / 2.0 + nodesep);
    layout.height = layout.height.max(single_y + node_height / 2.0 + ranksep);
}
