//! Dummy-chain normalization: edges spanning more than one rank are split
//! into unit-length segments through zero-sized dummy nodes so ordering and
//! positioning see one layer at a time. `undo` turns the dummy coordinates
//! back into interior bend points on the restored edge.

use crate::model::Point;

use super::{EdgeLabel, LayoutGraph, NodeLabel, is_active};

pub(crate) fn run(g: &mut LayoutGraph) {
    g.graph_mut().dummy_chains.clear();

    for e in g.edge_keys() {
        if !is_active(g, &e) {
            continue;
        }
        let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
        let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
        if w_rank <= v_rank + 1 {
            continue;
        }
        let Some(label) = g.edge_by_key(&e).cloned() else {
            continue;
        };
        let _ = g.remove_edge_key(&e);

        let mut prev = e.v.clone();
        let mut first = true;
        for rank in (v_rank + 1)..w_rank {
            let dummy = add_dummy_node(
                g,
                NodeLabel {
                    rank: Some(rank),
                    dummy: true,
                    edge_label: first.then(|| label.clone()),
                    edge_key: first.then(|| e.clone()),
                    ..Default::default()
                },
            );
            if first {
                g.graph_mut().dummy_chains.push(dummy.clone());
                first = false;
            }
            g.set_edge(prev, dummy.clone(), EdgeLabel::default());
            prev = dummy;
        }
        g.set_edge(prev, e.w.clone(), EdgeLabel::default());
    }
}

/// Removes every dummy chain, restoring the original edge with the dummies'
/// coordinates as bend points between the endpoint node centers.
pub(crate) fn undo(g: &mut LayoutGraph) {
    let chains = std::mem::take(&mut g.graph_mut().dummy_chains);
    for start in chains {
        let Some(node) = g.node(&start) else {
            continue;
        };
        let Some(mut label) = node.edge_label.clone() else {
            continue;
        };
        let Some(key) = node.edge_key.clone() else {
            continue;
        };

        let mut bends: Vec<Point> = Vec::new();
        let mut v = start;
        while let Some(node) = g.node(&v) {
            if !node.dummy {
                break;
            }
            if let (Some(x), Some(y)) = (node.x, node.y) {
                bends.push(Point { x, y });
            }
            let next = g.successors(&v).first().map(|s| s.to_string());
            let _ = g.remove_node(&v);
            match next {
                Some(next) => v = next,
                None => break,
            }
        }

        let Some((sx, sy)) = g.node(&key.v).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };
        let Some((tx, ty)) = g.node(&key.w).and_then(|n| Some((n.x?, n.y?))) else {
            continue;
        };
        label.points = Vec::with_capacity(bends.len() + 2);
        label.points.push(Point { x: sx, y: sy });
        label.points.extend(bends);
        label.points.push(Point { x: tx, y: ty });

        g.set_edge(key.v, key.w, label);
    }
}

fn add_dummy_node(g: &mut LayoutGraph, label: NodeLabel) -> String {
    for i in 1usize.. {
        let id = format!("_d{i}");
        if !g.has_node(&id) {
            g.set_node(&id, label.clone());
            return id;
        }
    }
    unreachable!()
}
