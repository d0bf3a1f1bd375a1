//! Topology canvas
//!
//! Fills the central panel with a painter, draws the current snapshot, and
//! turns clicks into selection actions via hit testing. All drawing state
//! comes from `UiState`; the canvas itself is stateless between frames.

use egui::{Align2, Color32, FontId, Sense, Ui};

use crate::frontend::state::{AppAction, UiState};
use crate::hittest::{hit_test, Hit};
use crate::layout::compute_layout;
use crate::render::draw_topology;
use crate::types::Selection;

/// Render the topology canvas.
pub fn render_canvas(ui: &mut Ui, state: &UiState) -> Vec<AppAction> {
    let mut actions = Vec::new();

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
    let rect = response.rect;
    painter.rect_filled(rect, 0, state.theme.background);

    let Some(snapshot) = &state.snapshot else {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Waiting for topology data...",
            FontId::proportional(16.0),
            Color32::GRAY,
        );
        return actions;
    };

    let layout = compute_layout(snapshot, &state.template, rect);
    draw_topology(&painter, snapshot, &layout, &state.selection, &state.theme);

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            // A miss clears the selection; clicking the selected entity
            // again just re-selects it
            let selection = match hit_test(pointer, &layout, snapshot) {
                Some(Hit::Node(id)) => Selection::Node(id),
                Some(Hit::Link(id)) => Selection::Link(id),
                None => Selection::None,
            };
            actions.push(AppAction::Select(selection));
        }
    }

    actions
}
