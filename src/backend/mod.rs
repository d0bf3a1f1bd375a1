//! Backend module: server communication on a worker thread
//!
//! All network I/O happens on a dedicated worker thread so the UI stays
//! responsive. The two sides communicate over crossbeam channels:
//!
//! - [`BackendCommand`] - UI → worker (sync now, dispatch a mutation, run demo)
//! - [`BackendMessage`] - worker → UI (snapshots, status, demo progress)
//! - [`FrontendBridge`] - UI-side handle for sending commands and draining messages
//! - [`SyncWorker`] - the worker loop: periodic sync, dispatch, demo orchestration
//!
//! # Example
//!
//! ```ignore
//! use topovis::backend::spawn_backend;
//! use topovis::config::AppConfig;
//!
//! let bridge = spawn_backend(AppConfig::from_env());
//! bridge.send_command(topovis::backend::BackendCommand::SyncNow);
//! for msg in bridge.drain() {
//!     // apply to UI state
//! }
//! ```

pub mod api;
pub mod http;
pub mod worker;

pub use api::TopologyApi;
pub use http::HttpApi;
pub use worker::SyncWorker;

use crate::config::AppConfig;
use crate::demo::StepPhase;
use crate::types::{SyncStatus, TopologySnapshot};
use crossbeam_channel::{bounded, Receiver, Sender};

/// Capacity of the command and message queues
const CHANNEL_CAPACITY: usize = 64;

/// A single state-mutating request to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchAction {
    ToggleLink(String),
    LinkUp(String),
    LinkDown(String),
    FailNode(String),
    RecoverNode(String),
    ResetTopology,
    RunScenario(String),
}

impl std::fmt::Display for DispatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchAction::ToggleLink(id) => write!(f, "toggle link {}", id),
            DispatchAction::LinkUp(id) => write!(f, "link {} up", id),
            DispatchAction::LinkDown(id) => write!(f, "link {} down", id),
            DispatchAction::FailNode(id) => write!(f, "fail node {}", id),
            DispatchAction::RecoverNode(id) => write!(f, "recover node {}", id),
            DispatchAction::ResetTopology => write!(f, "reset topology"),
            DispatchAction::RunScenario(name) => write!(f, "scenario {}", name),
        }
    }
}

/// Message sent from the UI to the worker
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// Force one sync outside the periodic schedule
    SyncNow,
    /// Issue a mutating request, then re-sync
    Dispatch(DispatchAction),
    /// Start the scripted demo (ignored if one is already running)
    RunDemo,
    /// Stop the worker loop
    Shutdown,
}

/// Message sent from the worker to the UI
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// A fresh snapshot replacing the previous one wholesale
    Snapshot(TopologySnapshot),
    /// Status-line update
    Status(SyncStatus),
    /// A demo run has begun; the UI builds its step list
    DemoStarted,
    /// A step changed phase
    DemoStep {
        index: usize,
        total: usize,
        phase: StepPhase,
    },
    /// The demo run (including its post-completion delay) is over
    DemoFinished,
    /// The worker loop exited
    Shutdown,
}

/// UI-side handle to the worker
pub struct FrontendBridge {
    command_tx: Sender<BackendCommand>,
    message_rx: Receiver<BackendMessage>,
}

impl FrontendBridge {
    /// Create the bridge plus the worker-side channel ends.
    pub fn new() -> (Self, Receiver<BackendCommand>, Sender<BackendMessage>) {
        let (command_tx, command_rx) = bounded(CHANNEL_CAPACITY);
        let (message_tx, message_rx) = bounded(CHANNEL_CAPACITY);
        (
            Self {
                command_tx,
                message_rx,
            },
            command_rx,
            message_tx,
        )
    }

    /// Send a command to the worker
    pub fn send_command(&self, cmd: BackendCommand) {
        if self.command_tx.try_send(cmd).is_err() {
            tracing::warn!("Command queue full or disconnected; command dropped");
        }
    }

    /// Drain all pending messages from the worker
    pub fn drain(&self) -> Vec<BackendMessage> {
        self.message_rx.try_iter().collect()
    }

    /// Ask the worker to stop
    pub fn shutdown(&self) {
        let _ = self.command_tx.try_send(BackendCommand::Shutdown);
    }
}

/// Spawn the sync worker on its own thread against the real HTTP API.
pub fn spawn_backend(config: AppConfig) -> FrontendBridge {
    let (bridge, command_rx, message_tx) = FrontendBridge::new();
    let api = Box::new(HttpApi::new(config.server_url.clone()));

    std::thread::Builder::new()
        .name("sync-worker".to_string())
        .spawn(move || {
            let mut worker = SyncWorker::new(api, command_rx, message_tx, &config);
            worker.run();
        })
        .expect("failed to spawn sync worker thread");

    bridge
}
