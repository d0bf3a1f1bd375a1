//! Main application
//!
//! `TopoVisApp` owns the UI state and the bridge to the sync worker. Each
//! frame it drains worker messages into `UiState`, renders the panels, and
//! applies the actions they emitted. Panels never touch the bridge.

use chrono::Local;

use crate::backend::{BackendCommand, BackendMessage, FrontendBridge};
use crate::config::AppConfig;
use crate::demo::DemoRun;
use crate::frontend::canvas::render_canvas;
use crate::frontend::controls::render_controls;
use crate::frontend::demo_panel::render_demo_panel;
use crate::frontend::info_panel::render_info_panel;
use crate::frontend::legend::render_legend;
use crate::frontend::state::{AppAction, UiState};
use crate::frontend::status_bar::render_status_bar;
use crate::types::SyncStatus;

/// How often the UI repaints while idle, to pick up worker messages
const REPAINT_INTERVAL: std::time::Duration = std::time::Duration::from_millis(250);

/// Main application state
pub struct TopoVisApp {
    bridge: FrontendBridge,
    state: UiState,
}

impl TopoVisApp {
    /// Create the application around an already-spawned backend.
    pub fn new(bridge: FrontendBridge, config: &AppConfig) -> Self {
        Self {
            bridge,
            state: UiState::new(config.server_url.clone()),
        }
    }

    /// Apply all pending worker messages to the UI state.
    fn process_backend_messages(&mut self) -> bool {
        let messages = self.bridge.drain();
        let had_messages = !messages.is_empty();

        for msg in messages {
            match msg {
                BackendMessage::Snapshot(snapshot) => {
                    // Drop a selection whose entity vanished before the
                    // new snapshot replaces the old one
                    self.state.selection.retain_valid(&snapshot);
                    self.state.snapshot = Some(snapshot);
                    self.state.last_sync = Some(Local::now());
                }
                BackendMessage::Status(status) => {
                    if let SyncStatus::Error(ref msg) = status {
                        tracing::warn!("Sync error: {}", msg);
                    }
                    self.state.status = status;
                }
                BackendMessage::DemoStarted => {
                    self.state.demo = Some(DemoRun::new());
                }
                BackendMessage::DemoStep { index, phase, .. } => {
                    if let Some(run) = &mut self.state.demo {
                        run.apply(index, phase);
                    }
                }
                BackendMessage::DemoFinished => {
                    self.state.demo = None;
                }
                BackendMessage::Shutdown => {
                    tracing::info!("Backend shutdown received");
                }
            }
        }

        had_messages
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Select(selection) => {
                self.state.selection = selection;
            }
            AppAction::SyncNow => {
                self.bridge.send_command(BackendCommand::SyncNow);
            }
            AppAction::Dispatch(dispatch) => {
                self.bridge.send_command(BackendCommand::Dispatch(dispatch));
            }
            AppAction::RunDemo => {
                self.bridge.send_command(BackendCommand::RunDemo);
            }
        }
    }
}

impl eframe::App for TopoVisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let had_messages = self.process_backend_messages();
        if had_messages {
            ctx.request_repaint();
        } else {
            // Keep draining worker messages even when idle
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            actions.extend(render_controls(ui, &self.state));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(ui, &self.state);
        });

        egui::SidePanel::right("side_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                actions.extend(render_info_panel(ui, &self.state));
                ui.add_space(12.0);

                if let Some(run) = &self.state.demo {
                    render_demo_panel(ui, run);
                    ui.add_space(12.0);
                }

                render_legend(ui, &self.state.theme);
            });

        let background = self.state.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(background))
            .show(ctx, |ui| {
                actions.extend(render_canvas(ui, &self.state));
            });

        for action in actions {
            self.handle_action(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.bridge.shutdown();
    }
}
