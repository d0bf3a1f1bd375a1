//! Color legend for the topology view

use egui::{RichText, Ui};

use crate::render::Theme;

/// Render the static legend.
pub fn render_legend(ui: &mut Ui, theme: &Theme) {
    ui.heading("Legend");
    ui.separator();

    egui::Grid::new("legend").num_columns(2).show(ui, |ui| {
        ui.colored_label(theme.normal_node, "\u{25cf}");
        ui.label(RichText::new("Node").small());
        ui.end_row();

        ui.colored_label(theme.root_node, "\u{25cf}");
        ui.label(RichText::new("Root node").small());
        ui.end_row();

        ui.colored_label(theme.failed_node, "\u{25cf}");
        ui.label(RichText::new("Failed node").small());
        ui.end_row();

        ui.colored_label(theme.spanning_link, "\u{2501}");
        ui.label(RichText::new("Spanning-tree link").small());
        ui.end_row();

        ui.colored_label(theme.backup_link, "\u{2500}");
        ui.label(RichText::new("Backup link").small());
        ui.end_row();

        ui.colored_label(theme.failed_link, "\u{2500}");
        ui.label(RichText::new("Down link").small());
        ui.end_row();

        ui.colored_label(theme.selected, "\u{25cf}");
        ui.label(RichText::new("Selected").small());
        ui.end_row();
    });
}
