//! Integration tests for snapshot decoding, layout, and link styling
//!
//! These exercise the pipeline from server JSON to pixel positions and
//! draw styles, without a running UI.

mod common;

use common::four_node_snapshot;
use egui::{pos2, Rect};
use topovis::layout::{compute_layout, LayoutTemplate};
use topovis::render::{
    link_style, Theme, PLAIN_LINK_WIDTH, SELECTED_LINK_WIDTH, SPANNING_LINK_WIDTH,
};
use topovis::types::{LinkState, Selection, TopologySnapshot};

#[test]
fn test_decode_full_server_payload() {
    let snap: TopologySnapshot = serde_json::from_str(
        r#"{
            "nodes": {
                "n1": {"node_name": "Node1", "state": "ACTIVE", "is_root": true},
                "n2": {"node_name": "Node2", "state": "FAILED", "is_root": false}
            },
            "links": {
                "l12": {"nodes": ["n1", "n2"], "state": "DOWN", "bandwidth": 100}
            },
            "spanning_tree": []
        }"#,
    )
    .unwrap();

    assert_eq!(snap.nodes.len(), 2);
    assert!(snap.nodes["n1"].is_root);
    assert_eq!(snap.links["l12"].state, LinkState::Down);
    assert_eq!(snap.links["l12"].endpoints(), Some(("n1", "n2")));
    assert!(snap.spanning_tree.is_empty());
}

#[test]
fn test_layout_on_800x600_canvas() {
    let snap = four_node_snapshot();
    let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
    let layout = compute_layout(&snap, &LayoutTemplate::default(), rect);

    // scale = 0.3 * 600 = 180, center (400, 300); unit y points up
    assert_eq!(layout["n1"], pos2(220.0, 120.0));
    assert_eq!(layout["n2"], pos2(580.0, 120.0));
    assert_eq!(layout["n3"], pos2(220.0, 480.0));
    assert_eq!(layout["n4"], pos2(580.0, 480.0));
}

#[test]
fn test_layout_follows_panel_offset() {
    let snap = four_node_snapshot();
    let rect = Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(800.0, 600.0));
    let layout = compute_layout(&snap, &LayoutTemplate::default(), rect);

    assert_eq!(layout["n1"], pos2(320.0, 170.0));
    assert_eq!(layout["n4"], pos2(680.0, 530.0));
}

#[test]
fn test_node_without_template_entry_is_unplaced() {
    let mut snap = four_node_snapshot();
    snap.nodes
        .insert("n5".into(), common::node("Node5", false, topovis::types::NodeState::Active));

    let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
    let layout = compute_layout(&snap, &LayoutTemplate::default(), rect);

    assert!(!layout.contains_key("n5"));
    assert_eq!(layout.len(), 4);
}

#[test]
fn test_link_styles_across_a_failure() {
    let theme = Theme::default();
    let mut snap = four_node_snapshot();

    // Healthy: spanning links green and thick, backup grey and thin
    let (color, width) = link_style("l12", &snap.links["l12"].clone(), &snap, &Selection::None, &theme);
    assert_eq!((color, width), (theme.spanning_link, SPANNING_LINK_WIDTH));
    let (color, width) = link_style("l34", &snap.links["l34"].clone(), &snap, &Selection::None, &theme);
    assert_eq!((color, width), (theme.backup_link, PLAIN_LINK_WIDTH));

    // l12 goes down and the tree reconverges onto l34
    snap.links.get_mut("l12").unwrap().state = LinkState::Down;
    snap.spanning_tree = vec!["l13".into(), "l24".into(), "l34".into()];

    let (color, _) = link_style("l12", &snap.links["l12"].clone(), &snap, &Selection::None, &theme);
    assert_eq!(color, theme.failed_link);
    let (color, width) = link_style("l34", &snap.links["l34"].clone(), &snap, &Selection::None, &theme);
    assert_eq!((color, width), (theme.spanning_link, SPANNING_LINK_WIDTH));

    // Selecting the down link overrides its failure styling
    let selection = Selection::Link("l12".to_string());
    let (color, width) = link_style("l12", &snap.links["l12"].clone(), &snap, &selection, &theme);
    assert_eq!((color, width), (theme.selected, SELECTED_LINK_WIDTH));
}
