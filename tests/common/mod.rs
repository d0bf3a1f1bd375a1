//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use topovis::types::{LinkState, LinkView, NodeState, NodeView, TopologySnapshot};

/// Build the canonical four-node topology: a square of nodes with four
/// primary links plus one backup, spanning tree over the primaries.
pub fn four_node_snapshot() -> TopologySnapshot {
    let mut snap = TopologySnapshot::default();
    snap.nodes.insert("n1".into(), node("Node1", true, NodeState::Active));
    snap.nodes.insert("n2".into(), node("Node2", false, NodeState::Active));
    snap.nodes.insert("n3".into(), node("Node3", false, NodeState::Active));
    snap.nodes.insert("n4".into(), node("Node4", false, NodeState::Active));

    snap.links.insert("l12".into(), link("n1", "n2", LinkState::Up, 100.0));
    snap.links.insert("l13".into(), link("n1", "n3", LinkState::Up, 100.0));
    snap.links.insert("l24".into(), link("n2", "n4", LinkState::Up, 100.0));
    snap.links.insert("l34".into(), link("n3", "n4", LinkState::Up, 10.0));

    snap.spanning_tree = vec!["l12".into(), "l13".into(), "l24".into()];
    snap
}

pub fn node(name: &str, is_root: bool, state: NodeState) -> NodeView {
    NodeView {
        name: name.to_string(),
        state,
        is_root,
    }
}

pub fn link(a: &str, b: &str, state: LinkState, bandwidth: f64) -> LinkView {
    LinkView {
        nodes: vec![a.to_string(), b.to_string()],
        state,
        bandwidth,
    }
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
