//! Render engine
//!
//! Paints the topology onto an `egui::Painter`: all links first, then all
//! nodes over them, so node bodies are never occluded by link lines. The
//! style decisions (color and stroke width precedence) live in pure helpers
//! so they can be tested without a painter.
//!
//! Output is a deterministic function of (snapshot, layout, selection);
//! entities without a layout position are skipped silently.

use crate::types::{LinkState, LinkView, NodeState, NodeView, Selection, TopologySnapshot};
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};
use std::collections::HashMap;

/// Node radius when not selected
pub const NODE_RADIUS: f32 = 30.0;
/// Node radius when selected
pub const SELECTED_NODE_RADIUS: f32 = 35.0;
/// Extra radius of the highlight disc painted beneath a selected node
pub const HIGHLIGHT_RING_EXTRA: f32 = 5.0;

/// Stroke width for a selected link
pub const SELECTED_LINK_WIDTH: f32 = 6.0;
/// Stroke width for a spanning-tree link
pub const SPANNING_LINK_WIDTH: f32 = 4.0;
/// Stroke width for backup and down links
pub const PLAIN_LINK_WIDTH: f32 = 2.0;

/// Color palette for the topology view
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub normal_node: Color32,
    pub root_node: Color32,
    pub failed_node: Color32,
    pub spanning_link: Color32,
    pub backup_link: Color32,
    pub failed_link: Color32,
    pub selected: Color32,
    pub outline: Color32,
    pub label: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x24),
            normal_node: Color32::from_rgb(0x44, 0x88, 0xff),
            root_node: Color32::from_rgb(0x44, 0xff, 0x44),
            failed_node: Color32::from_rgb(0xff, 0x44, 0x44),
            spanning_link: Color32::from_rgb(0x44, 0xff, 0x44),
            backup_link: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            failed_link: Color32::from_rgb(0x88, 0x88, 0x88),
            selected: Color32::from_rgb(0xff, 0xff, 0x00),
            outline: Color32::BLACK,
            label: Color32::BLACK,
        }
    }
}

/// Link color and stroke width. Precedence, first match wins:
/// selected, DOWN, spanning tree, backup.
pub fn link_style(
    link_id: &str,
    link: &LinkView,
    snapshot: &TopologySnapshot,
    selection: &Selection,
    theme: &Theme,
) -> (Color32, f32) {
    if selection.link_id() == Some(link_id) {
        (theme.selected, SELECTED_LINK_WIDTH)
    } else if link.state == LinkState::Down {
        (theme.failed_link, PLAIN_LINK_WIDTH)
    } else if snapshot.is_spanning(link_id) {
        (theme.spanning_link, SPANNING_LINK_WIDTH)
    } else {
        (theme.backup_link, PLAIN_LINK_WIDTH)
    }
}

/// Node fill color. Precedence: FAILED, root, normal.
pub fn node_fill(node: &NodeView, theme: &Theme) -> Color32 {
    if node.state == NodeState::Failed {
        theme.failed_node
    } else if node.is_root {
        theme.root_node
    } else {
        theme.normal_node
    }
}

/// Paint the whole topology: links, then nodes.
pub fn draw_topology(
    painter: &Painter,
    snapshot: &TopologySnapshot,
    layout: &HashMap<String, Pos2>,
    selection: &Selection,
    theme: &Theme,
) {
    for (link_id, link) in &snapshot.links {
        let Some((a, b)) = link.endpoints() else {
            continue;
        };
        let (Some(&pa), Some(&pb)) = (layout.get(a), layout.get(b)) else {
            continue;
        };
        let (color, width) = link_style(link_id, link, snapshot, selection, theme);
        painter.line_segment([pa, pb], Stroke::new(width, color));
    }

    for (node_id, node) in &snapshot.nodes {
        let Some(&pos) = layout.get(node_id) else {
            continue;
        };
        let selected = selection.node_id() == Some(node_id);
        let radius = if selected {
            SELECTED_NODE_RADIUS
        } else {
            NODE_RADIUS
        };

        if selected {
            painter.circle_filled(pos, radius + HIGHLIGHT_RING_EXTRA, theme.selected);
        }
        painter.circle_filled(pos, radius, node_fill(node, theme));
        painter.circle_stroke(pos, radius, Stroke::new(2.0, theme.outline));

        painter.text(
            pos - egui::vec2(0.0, 8.0),
            Align2::CENTER_CENTER,
            &node.name,
            FontId::proportional(12.0),
            theme.label,
        );
        let state_label = if node.is_root {
            format!("{} (Root)", node.state.glyph())
        } else {
            node.state.glyph().to_string()
        };
        painter.text(
            pos + egui::vec2(0.0, 10.0),
            Align2::CENTER_CENTER,
            state_label,
            FontId::proportional(10.0),
            theme.label,
        );
    }
}
