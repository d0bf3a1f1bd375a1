//! TopoVis - Main Entry Point
//!
//! Desktop client for the network-topology simulation server. Takes the
//! server address as the first argument, falling back to the
//! `TOPOVIS_SERVER` environment variable and then the default.

use topovis::{backend::spawn_backend, config::AppConfig, frontend::TopoVisApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,topovis=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting TopoVis against {}", config.server_url);

    let bridge = spawn_backend(config.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("TopoVis - Network Topology Visualizer"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "TopoVis",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(TopoVisApp::new(bridge, &config)))
        }),
    );

    tracing::info!("Shutting down...");
    result
}
