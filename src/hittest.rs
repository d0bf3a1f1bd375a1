//! Hit-test engine
//!
//! Resolves a pointer coordinate to the graph entity under it. Nodes are
//! tested before links: a click inside both a node's and a link's tolerance
//! must select the node. Only when no node matches is the link test run.
//!
//! Malformed links and links with an unplaced endpoint are skipped, matching
//! the render engine.

use crate::geometry::{point_in_circle, point_segment_distance};
use crate::types::TopologySnapshot;
use egui::Pos2;
use std::collections::HashMap;

/// Pointer-to-node tolerance in pixels
pub const NODE_TOLERANCE: f32 = 40.0;

/// Pointer-to-link tolerance in pixels
pub const LINK_TOLERANCE: f32 = 15.0;

/// A resolved hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Node(String),
    Link(String),
}

/// Resolve a pointer position against the current layout and snapshot.
///
/// Returns the first node within [`NODE_TOLERANCE`], else the first link
/// within [`LINK_TOLERANCE`] of its segment, else `None`. Iteration follows
/// snapshot order, which is deterministic (BTreeMap).
pub fn hit_test(
    pointer: Pos2,
    layout: &HashMap<String, Pos2>,
    snapshot: &TopologySnapshot,
) -> Option<Hit> {
    for (id, _) in &snapshot.nodes {
        if let Some(&pos) = layout.get(id) {
            if point_in_circle(pointer, pos, NODE_TOLERANCE) {
                return Some(Hit::Node(id.clone()));
            }
        }
    }

    for (id, link) in &snapshot.links {
        let Some((a, b)) = link.endpoints() else {
            continue;
        };
        let (Some(&pa), Some(&pb)) = (layout.get(a), layout.get(b)) else {
            continue;
        };
        if point_segment_distance(pointer, pa, pb) < LINK_TOLERANCE {
            return Some(Hit::Link(id.clone()));
        }
    }

    None
}
