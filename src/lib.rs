//! # TopoVis: Network Topology Visualizer
//!
//! An interactive desktop client for a network-topology simulation server.
//! It polls the server for the current topology (nodes, links, spanning
//! tree), renders it on a canvas, and lets the operator inject faults:
//! fail nodes, cut links, and watch the spanning tree reconverge.
//!
//! ## Architecture
//!
//! - **Backend**: polls the server over HTTP on a dedicated worker thread
//!   and orchestrates the scripted demo
//! - **Frontend**: renders the topology with eframe/egui; panels emit
//!   actions the app applies centrally
//! - **Communication**: crossbeam channels for thread-safe data transfer
//!
//! ## Example
//!
//! ```ignore
//! use topovis::{backend::spawn_backend, config::AppConfig, frontend::TopoVisApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let config = AppConfig::from_env();
//!     let bridge = spawn_backend(config.clone());
//!
//!     eframe::run_native(
//!         "TopoVis",
//!         eframe::NativeOptions::default(),
//!         Box::new(move |_cc| Ok(Box::new(TopoVisApp::new(bridge, &config)))),
//!     )
//! }
//! ```

pub mod backend;
pub mod config;
pub mod demo;
pub mod error;
pub mod frontend;
pub mod geometry;
pub mod hittest;
pub mod layout;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use backend::{spawn_backend, BackendCommand, BackendMessage, DispatchAction, FrontendBridge};
pub use config::AppConfig;
pub use error::{Result, TopoVisError};
pub use frontend::TopoVisApp;
pub use types::{Selection, SyncStatus, TopologySnapshot};
