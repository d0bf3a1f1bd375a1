//! Layout engine
//!
//! Maps a fixed set of logical node names to pixel coordinates for the
//! current canvas rect. The template is data (name → unit-square position)
//! rather than hardcoded branching, but the default is the canonical
//! four-node arrangement and the observable behavior matches it exactly.
//!
//! The layout is recomputed whenever the snapshot is replaced or the canvas
//! rect changes; it is never patched incrementally. Nodes whose display
//! name is absent from the template get no entry and are excluded from
//! rendering and hit-testing.

use crate::types::TopologySnapshot;
use egui::{pos2, Pos2, Rect};
use std::collections::{BTreeMap, HashMap};

/// Fraction of the smaller canvas dimension used as the unit-square scale
pub const SCALE_FACTOR: f32 = 0.3;

/// Logical layout template: display name → unit-square coordinate.
///
/// Unit y is "up": positive y renders above the canvas center.
#[derive(Debug, Clone)]
pub struct LayoutTemplate {
    positions: BTreeMap<String, (f32, f32)>,
}

impl Default for LayoutTemplate {
    /// The canonical four-node square
    fn default() -> Self {
        Self::from_pairs([
            ("Node1", (-1.0, 1.0)),
            ("Node2", (1.0, 1.0)),
            ("Node3", (-1.0, -1.0)),
            ("Node4", (1.0, -1.0)),
        ])
    }
}

impl LayoutTemplate {
    /// Build a template from (name, unit position) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, (f32, f32))>,
        S: Into<String>,
    {
        Self {
            positions: pairs
                .into_iter()
                .map(|(name, pos)| (name.into(), pos))
                .collect(),
        }
    }

    /// Unit-square position for a display name, if the template knows it
    pub fn unit_position(&self, name: &str) -> Option<(f32, f32)> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }
}

/// Compute pixel positions for every node the template knows.
///
/// `center = rect.center()`, `scale = 0.3 × min(width, height)`; the unit
/// y axis is flipped so positive unit y lands above center.
pub fn compute_layout(
    snapshot: &TopologySnapshot,
    template: &LayoutTemplate,
    rect: Rect,
) -> HashMap<String, Pos2> {
    let center = rect.center();
    let scale = SCALE_FACTOR * rect.width().min(rect.height());

    snapshot
        .nodes
        .iter()
        .filter_map(|(id, node)| {
            template.unit_position(&node.name).map(|(ux, uy)| {
                (
                    id.clone(),
                    pos2(center.x + ux * scale, center.y - uy * scale),
                )
            })
        })
        .collect()
}
