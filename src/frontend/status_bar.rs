//! Status bar: bottom strip showing sync state, server address, and the
//! time of the last successful sync.

use egui::{Color32, RichText, Ui};

use crate::frontend::state::UiState;
use crate::types::SyncStatus;

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, state: &UiState) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let (color, text) = match &state.status {
            SyncStatus::Ready => (Color32::GREEN, state.status.to_string()),
            SyncStatus::Loading | SyncStatus::Processing => {
                (Color32::YELLOW, state.status.to_string())
            }
            SyncStatus::Error(_) => (Color32::RED, state.status.to_string()),
        };
        ui.colored_label(color, "\u{25cf}");
        ui.label(RichText::new(text).small());

        ui.separator();
        ui.label(RichText::new(format!("Server: {}", state.server_url)).small());

        if let Some(snapshot) = &state.snapshot {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "{} nodes, {} links",
                    snapshot.nodes.len(),
                    snapshot.links.len()
                ))
                .small(),
            );
        }

        if let Some(ts) = state.last_sync {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("Last sync: {}", ts.format("%H:%M:%S"))).small(),
                );
            });
        }
    });
}
