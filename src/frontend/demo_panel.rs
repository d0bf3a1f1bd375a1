//! Demo progress panel
//!
//! Visible only while a scripted run is in flight. Shows the step list
//! with per-step phase markers, the active step's expected outcome, and an
//! overall progress bar. Pure display; the worker drives all transitions.

use egui::{Color32, ProgressBar, RichText, Ui};

use crate::demo::{DemoRun, StepPhase};

/// Render the demo progress panel.
pub fn render_demo_panel(ui: &mut Ui, run: &DemoRun) {
    ui.heading("Demo");
    ui.separator();

    for (i, step) in run.steps.iter().enumerate() {
        let phase = run.phases[i];
        let (marker, color) = match phase {
            StepPhase::Pending => ("\u{25cb}", Color32::GRAY),
            StepPhase::Active => ("\u{25b6}", Color32::YELLOW),
            StepPhase::Completed => ("\u{2713}", Color32::GREEN),
        };

        ui.horizontal(|ui| {
            ui.colored_label(color, marker);
            let title = format!("{}. {}", i + 1, step.title);
            match phase {
                StepPhase::Active => {
                    ui.label(RichText::new(title).strong());
                }
                StepPhase::Completed => {
                    ui.label(RichText::new(title).weak());
                }
                StepPhase::Pending => {
                    ui.label(title);
                }
            }
        });
    }

    if let Some(active) = run.active_step() {
        let step = &run.steps[active];
        ui.add_space(6.0);
        ui.label(RichText::new(step.description).small());
        ui.label(
            RichText::new(format!("Expected: {}", step.expected))
                .small()
                .italics(),
        );
    }

    ui.add_space(6.0);
    ui.add(ProgressBar::new(run.progress()).show_percentage());
}
