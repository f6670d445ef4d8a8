//! Coordinate assignment: each layer is packed left to right with `nodesep`
//! gaps and centered on the widest layer; ranks are stacked with edge-to-edge
//! `ranksep`. Coordinates are node centers.

use super::{LayoutGraph, layer_matrix};

pub(crate) fn position(g: &mut LayoutGraph) {
    let layers = layer_matrix(g);
    let nodesep = g.graph().nodesep;
    let ranksep = g.graph().ranksep;

    let size = |g: &LayoutGraph, id: &str| -> (f64, f64) {
        g.node(id).map(|n| (n.width, n.height)).unwrap_or((0.0, 0.0))
    };

    let mut layer_widths: Vec<f64> = Vec::with_capacity(layers.len());
    let mut layer_heights: Vec<f64> = Vec::with_capacity(layers.len());
    for layer in &layers {
        let mut width = 0.0;
        let mut height: f64 = 0.0;
        for (i, id) in layer.iter().enumerate() {
            let (w, h) = size(g, id);
            width += w;
            if i + 1 < layer.len() {
                width += nodesep;
            }
            height = height.max(h);
        }
        layer_widths.push(width);
        layer_heights.push(height);
    }
    let max_width = layer_widths.iter().copied().fold(0.0_f64, f64::max);

    let mut y_cursor = 0.0;
    for (i, layer) in layers.iter().enumerate() {
        let y = y_cursor + layer_heights[i] / 2.0;
        let mut x_cursor = (max_width - layer_widths[i]) / 2.0;
        for id in layer {
            let (w, _) = size(g, id);
            if let Some(label) = g.node_mut(id) {
                label.x = Some(x_cursor + w / 2.0);
                label.y = Some(y);
            }
            x_cursor += w + nodesep;
        }
        y_cursor += layer_heights[i];
        if i + 1 < layers.len() {
            y_cursor += ranksep;
        }
    }

    g.graph_mut().width = max_width;
    g.graph_mut().height = y_cursor;
}

#[cfg(test)]
mod tests {
    use super::super::{EdgeLabel, GraphLabel, NodeLabel, acyclic, normalize, order, rank};
    use super::*;

    fn positioned(g: &mut LayoutGraph) {
        acyclic::mark_feedback(g);
        rank::longest_path(g);
        rank::normalize_ranks(g);
        normalize::run(g);
        order::order(g);
        position(g);
    }

    fn sized(width: f64, height: f64) -> NodeLabel {
        NodeLabel {
            width,
            height,
            ..Default::default()
        }
    }

    fn center_of(g: &LayoutGraph, id: &str) -> (f64, f64) {
        let n = g.node(id).unwrap();
        (n.x.unwrap(), n.y.unwrap())
    }

    #[test]
    fn stacks_ranks_with_edge_to_edge_separation() {
        let mut g = LayoutGraph::new();
        g.set_graph(GraphLabel {
            nodesep: 5.0,
            ranksep: 5.0,
            ..Default::default()
        });
        g.set_node("a", sized(2.0, 2.0));
        g.set_node("b", sized(2.0, 2.0));
        g.set_edge("a", "b", EdgeLabel::default());
        positioned(&mut g);

        assert_eq!(center_of(&g, "a"), (1.0, 1.0));
        assert_eq!(center_of(&g, "b"), (1.0, 8.0));
        assert_eq!(g.graph().width, 2.0);
        assert_eq!(g.graph().height, 9.0);
    }

    #[test]
    fn centers_narrow_layers_on_the_widest() {
        let mut g = LayoutGraph::new();
        g.set_graph(GraphLabel {
            nodesep: 5.0,
            ranksep: 5.0,
            ..Default::default()
        });
        for id in ["a", "b", "c"] {
            g.set_node(id, sized(2.0, 2.0));
        }
        g.set_edge("a", "c", EdgeLabel::default());
        g.set_edge("b", "c", EdgeLabel::default());
        positioned(&mut g);

        // Layer 0 spans 2 + 5 + 2 = 9; the single node below is centered.
        assert_eq!(center_of(&g, "a").0, 1.0);
        assert_eq!(center_of(&g, "b").0, 8.0);
        assert_eq!(center_of(&g, "c").0, 4.5);
        assert_eq!(g.graph().width, 9.0);
    }

    #[test]
    fn empty_graph_has_zero_dimensions() {
        let mut g = LayoutGraph::new();
        positioned(&mut g);
        assert_eq!(g.graph().width, 0.0);
        assert_eq!(g.graph().height, 0.0);
    }
}
