//! Centers a finished layout inside the target viewport.

use crate::model::Layout;
use crate::options::LayoutOptions;

/// Shifts every node coordinate and edge point so a layout smaller than the
/// viewport sits in its middle. Oversized layouts only get the margin offset;
/// the caller is expected to pan or zoom.
pub(crate) fn shift_layout_to_center(layout: &mut Layout, opts: &LayoutOptions) {
    let width = opts.width;
    let height = opts.target_height();

    let mut offset_x = opts.margins.left;
    let mut offset_y = opts.margins.top;
    if layout.width < width {
        offset_x = (width - layout.width) / 2.0 + opts.margins.left;
    }
    if layout.height < height {
        offset_y = (height - layout.height) / 2.0 + opts.margins.top;
    }

    for node in layout.nodes.values_mut() {
        if let Some(x) = node.x {
            node.x = Some(x + offset_x);
        }
        if let Some(y) = node.y {
            node.y = Some(y + offset_y);
        }
    }
    for edge in layout.edges.values_mut() {
        for point in &mut edge.points {
            point.x += offset_x;
            point.y += offset_y;
        }
    }
}
