//! Top control strip
//!
//! Global actions: manual refresh, topology reset, and the scripted demo.
//! Everything except refresh is locked out while a demo run is active.

use egui::{RichText, Ui};

use crate::backend::DispatchAction;
use crate::frontend::state::{AppAction, UiState};

/// Render the control strip.
pub fn render_controls(ui: &mut Ui, state: &UiState) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let demo_active = state.demo_active();

    ui.horizontal(|ui| {
        ui.label(RichText::new("TopoVis").strong().size(16.0));
        ui.separator();

        if ui.button("Refresh").clicked() {
            actions.push(AppAction::SyncNow);
        }

        ui.add_enabled_ui(!demo_active, |ui| {
            if ui.button("Reset topology").clicked() {
                actions.push(AppAction::Dispatch(DispatchAction::ResetTopology));
            }

            if ui.button("Run demo").clicked() {
                actions.push(AppAction::RunDemo);
            }

            ui.separator();
            ui.label("Scenarios:");
            for (label, name) in [
                ("Link failure", "link_failure"),
                ("Link recovery", "link_recovery"),
                ("Node failure", "node_failure"),
            ] {
                if ui.button(label).clicked() {
                    actions.push(AppAction::Dispatch(DispatchAction::RunScenario(
                        name.to_string(),
                    )));
                }
            }
        });

        if demo_active {
            ui.separator();
            ui.label(RichText::new("Demo running...").italics());
        }
    });

    actions
}
