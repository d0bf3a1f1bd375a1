//! Selection info panel
//!
//! Shows the details of the selected node or link and offers the matching
//! mutation buttons. Selection state lives in `UiState`; a selection whose
//! entity vanished from the snapshot has already been cleared by the app,
//! so lookups here only miss in the frame between a click and a sync.

use egui::{Color32, RichText, Ui};

use crate::backend::DispatchAction;
use crate::frontend::state::{AppAction, UiState};
use crate::types::{LinkState, NodeState, Selection, TopologySnapshot};

/// Render the info panel for the current selection.
pub fn render_info_panel(ui: &mut Ui, state: &UiState) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading("Selection");
    ui.separator();

    let Some(snapshot) = &state.snapshot else {
        ui.label(RichText::new("No data yet").weak());
        return actions;
    };

    let controls_enabled = !state.demo_active();

    match &state.selection {
        Selection::None => {
            ui.label(RichText::new("Click a node or link to inspect it").weak());
        }
        Selection::Node(id) => {
            if let Some(node) = snapshot.nodes.get(id) {
                node_details(ui, id, node, snapshot);
                ui.add_space(8.0);
                node_buttons(ui, id, node.state, controls_enabled, &mut actions);
            }
        }
        Selection::Link(id) => {
            if let Some(link) = snapshot.links.get(id) {
                link_details(ui, id, link, snapshot);
                ui.add_space(8.0);
                link_buttons(ui, id, link.state, controls_enabled, &mut actions);
            }
        }
    }

    actions
}

fn node_details(ui: &mut Ui, id: &str, node: &crate::types::NodeView, snapshot: &TopologySnapshot) {
    ui.label(RichText::new(&node.name).strong().size(16.0));
    egui::Grid::new("node_details").num_columns(2).show(ui, |ui| {
        ui.label("Id");
        ui.label(id);
        ui.end_row();

        ui.label("State");
        let color = match node.state {
            NodeState::Active => Color32::GREEN,
            NodeState::Failed => Color32::RED,
        };
        ui.colored_label(color, node.state.to_string());
        ui.end_row();

        ui.label("Role");
        ui.label(if node.is_root { "Root" } else { "Member" });
        ui.end_row();

        ui.label("Links");
        let degree = snapshot
            .links
            .values()
            .filter(|l| l.nodes.iter().any(|n| n == id))
            .count();
        ui.label(degree.to_string());
        ui.end_row();
    });
}

fn node_buttons(
    ui: &mut Ui,
    id: &str,
    node_state: NodeState,
    enabled: bool,
    actions: &mut Vec<AppAction>,
) {
    ui.add_enabled_ui(enabled, |ui| match node_state {
        NodeState::Active => {
            if ui.button("Fail node").clicked() {
                actions.push(AppAction::Dispatch(DispatchAction::FailNode(
                    id.to_string(),
                )));
            }
        }
        NodeState::Failed => {
            if ui.button("Recover node").clicked() {
                actions.push(AppAction::Dispatch(DispatchAction::RecoverNode(
                    id.to_string(),
                )));
            }
        }
    });
}

fn link_details(ui: &mut Ui, id: &str, link: &crate::types::LinkView, snapshot: &TopologySnapshot) {
    // Endpoint display names, falling back to raw ids
    let endpoints = match link.endpoints() {
        Some((a, b)) => {
            let name = |nid: &str| {
                snapshot
                    .nodes
                    .get(nid)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| nid.to_string())
            };
            format!("{} \u{2194} {}", name(a), name(b))
        }
        None => "(malformed)".to_string(),
    };
    ui.label(RichText::new(endpoints).strong().size(16.0));

    egui::Grid::new("link_details").num_columns(2).show(ui, |ui| {
        ui.label("Id");
        ui.label(id);
        ui.end_row();

        ui.label("State");
        let color = match link.state {
            LinkState::Up => Color32::GREEN,
            LinkState::Down => Color32::RED,
        };
        ui.colored_label(color, link.state.to_string());
        ui.end_row();

        ui.label("Bandwidth");
        ui.label(format!("{} Mbps", link.bandwidth));
        ui.end_row();

        ui.label("Spanning tree");
        ui.label(if snapshot.is_spanning(id) { "Yes" } else { "No" });
        ui.end_row();
    });
}

fn link_buttons(
    ui: &mut Ui,
    id: &str,
    link_state: LinkState,
    enabled: bool,
    actions: &mut Vec<AppAction>,
) {
    ui.add_enabled_ui(enabled, |ui| {
        if ui.button("Toggle link").clicked() {
            actions.push(AppAction::Dispatch(DispatchAction::ToggleLink(
                id.to_string(),
            )));
        }
        match link_state {
            LinkState::Up => {
                if ui.button("Force down").clicked() {
                    actions.push(AppAction::Dispatch(DispatchAction::LinkDown(
                        id.to_string(),
                    )));
                }
            }
            LinkState::Down => {
                if ui.button("Force up").clicked() {
                    actions.push(AppAction::Dispatch(DispatchAction::LinkUp(
                        id.to_string(),
                    )));
                }
            }
        }
    });
}
