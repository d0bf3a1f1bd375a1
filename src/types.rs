//! Core data types for TopoVis
//!
//! This module contains the wire types deserialized from the topology server
//! and the client-side state enums built on top of them.
//!
//! # Main Types
//!
//! - [`TopologySnapshot`] - One complete, immutable picture of server state
//! - [`NodeView`] / [`LinkView`] - Per-entity views inside a snapshot
//! - [`Selection`] - The single current selection (node, link, or nothing)
//! - [`SyncStatus`] - What the status line shows about the last server call
//!
//! # Snapshot lifecycle
//!
//! A snapshot is created by each successful sync fetch and replaced
//! wholesale by the next; it is never patched in place. Maps use `BTreeMap`
//! so iteration order (and therefore hit-test tie behavior) is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Operational state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "FAILED")]
    Failed,
}

impl NodeState {
    /// Short glyph shown under the node label
    pub fn glyph(&self) -> &'static str {
        match self {
            NodeState::Active => "\u{2713}",
            NodeState::Failed => "\u{2717}",
        }
    }
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeState::Active => write!(f, "ACTIVE"),
            NodeState::Failed => write!(f, "FAILED"),
        }
    }
}

/// Operational state of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkState {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

impl std::fmt::Display for LinkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkState::Up => write!(f, "UP"),
            LinkState::Down => write!(f, "DOWN"),
        }
    }
}

/// Server-reported view of a single node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    /// Logical display name (one of a small fixed vocabulary)
    #[serde(rename = "node_name")]
    pub name: String,
    pub state: NodeState,
    #[serde(default)]
    pub is_root: bool,
}

/// Server-reported view of a single link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkView {
    /// Endpoint node ids. Entries with fewer than two ids are malformed and
    /// skipped everywhere, never treated as an error.
    #[serde(default)]
    pub nodes: Vec<String>,
    pub state: LinkState,
    #[serde(default)]
    pub bandwidth: f64,
}

impl LinkView {
    /// The two endpoint ids, or None for a malformed entry
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self.nodes.as_slice() {
            [a, b, ..] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

/// The full server-reported state at one instant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologySnapshot {
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeView>,
    #[serde(default)]
    pub links: BTreeMap<String, LinkView>,
    #[serde(default)]
    pub spanning_tree: Vec<String>,
}

impl TopologySnapshot {
    /// Whether a link is part of the active spanning tree
    pub fn is_spanning(&self, link_id: &str) -> bool {
        self.spanning_tree.iter().any(|id| id == link_id)
    }

    /// Resolve a node id from its display name
    pub fn node_id_by_name(&self, name: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id.as_str())
    }

    /// Resolve the link whose endpoints carry the two display names, in
    /// either order. Used by the demo script so steps survive id churn
    /// across a topology reset.
    pub fn link_id_between(&self, name_a: &str, name_b: &str) -> Option<&str> {
        let id_a = self.node_id_by_name(name_a)?;
        let id_b = self.node_id_by_name(name_b)?;
        self.links
            .iter()
            .find(|(_, link)| match link.endpoints() {
                Some((a, b)) => (a == id_a && b == id_b) || (a == id_b && b == id_a),
                None => false,
            })
            .map(|(id, _)| id.as_str())
    }
}

/// The single current selection.
///
/// The enum encodes the invariant that a node and a link are never selected
/// at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(String),
    Link(String),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Selected node id, if a node is selected
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    /// Selected link id, if a link is selected
    pub fn link_id(&self) -> Option<&str> {
        match self {
            Selection::Link(id) => Some(id),
            _ => None,
        }
    }

    /// Clear the selection if the referenced entity is absent from the
    /// snapshot. Called after every sync so a stale selection cannot
    /// outlive a reset.
    pub fn retain_valid(&mut self, snapshot: &TopologySnapshot) {
        let valid = match self {
            Selection::None => true,
            Selection::Node(id) => snapshot.nodes.contains_key(id.as_str()),
            Selection::Link(id) => snapshot.links.contains_key(id.as_str()),
        };
        if !valid {
            *self = Selection::None;
        }
    }
}

/// What the status line reports about the last server interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// A topology fetch is in flight
    Loading,
    /// Last sync succeeded
    Ready,
    /// A mutating request is in flight
    Processing,
    /// Last server call failed; the view keeps the previous snapshot
    Error(String),
}

impl Default for SyncStatus {
    fn default() -> Self {
        SyncStatus::Loading
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Loading => write!(f, "Loading..."),
            SyncStatus::Ready => write!(f, "Ready"),
            SyncStatus::Processing => write!(f, "Processing..."),
            SyncStatus::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}
