//! Sync worker thread
//!
//! The worker owns the server transport and all timing. Its loop selects
//! over the UI command channel and a periodic tick:
//!
//! - **Sync loop**: one sync at startup, then every poll interval. A failed
//!   fetch publishes an error status and keeps the last good snapshot.
//! - **Command dispatch**: mutating requests set a Processing status, hit
//!   the server, and always re-sync afterwards so the view reflects
//!   server-side truth rather than an optimistic local update.
//! - **Demo orchestration**: the scripted run executes inline on this
//!   thread, which makes tick suppression and strict step ordering
//!   trivial. Commands arriving mid-run are absorbed during the settle
//!   delays; a second RunDemo is a no-op.
//!
//! There is no request timeout or retry: a hung server call stalls the
//! worker with the status stuck at Processing/Loading until it returns.

use crate::backend::api::TopologyApi;
use crate::backend::{BackendCommand, BackendMessage, DispatchAction};
use crate::config::AppConfig;
use crate::demo::{demo_script, DemoAction, StepPhase};
use crate::types::{SyncStatus, TopologySnapshot};
use crossbeam_channel::{select, tick, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// The backend worker that runs the sync loop and demo orchestrator
pub struct SyncWorker {
    api: Box<dyn TopologyApi>,
    command_rx: Receiver<BackendCommand>,
    message_tx: Sender<BackendMessage>,
    poll_interval: Duration,
    settle_delay: Duration,
    /// Last successfully fetched snapshot; demo steps resolve display
    /// names against it
    snapshot: Option<TopologySnapshot>,
    /// Guard making the periodic tick a no-op and RunDemo a no-op while a
    /// scripted run owns the view
    demo_active: bool,
    running: bool,
}

impl SyncWorker {
    pub fn new(
        api: Box<dyn TopologyApi>,
        command_rx: Receiver<BackendCommand>,
        message_tx: Sender<BackendMessage>,
        config: &AppConfig,
    ) -> Self {
        Self {
            api,
            command_rx,
            message_tx,
            poll_interval: config.poll_interval,
            settle_delay: config.settle_delay,
            snapshot: None,
            demo_active: false,
            running: true,
        }
    }

    /// Run the worker loop until shutdown
    pub fn run(&mut self) {
        tracing::info!("Sync worker started");

        // Initial sync so the view is populated at startup
        self.sync_once();

        let command_rx = self.command_rx.clone();
        let ticker = tick(self.poll_interval);
        while self.running {
            select! {
                recv(command_rx) -> cmd => match cmd {
                    Ok(cmd) => self.handle_command(cmd),
                    Err(_) => self.running = false,
                },
                recv(ticker) -> _ => {
                    // Demo steps drive their own syncs
                    if !self.demo_active {
                        self.sync_once();
                    }
                }
            }
        }

        let _ = self.message_tx.send(BackendMessage::Shutdown);
        tracing::info!("Sync worker stopped");
    }

    fn handle_command(&mut self, cmd: BackendCommand) {
        match cmd {
            BackendCommand::SyncNow => self.sync_once(),
            BackendCommand::Dispatch(action) => self.dispatch(action),
            BackendCommand::RunDemo => self.run_demo(),
            BackendCommand::Shutdown => self.running = false,
        }
    }

    /// Fetch the current snapshot and publish it.
    ///
    /// On failure the previous snapshot stays on screen; only the status
    /// changes (stale-but-available policy).
    fn sync_once(&mut self) {
        self.send_status(SyncStatus::Loading);
        match self.api.fetch_topology() {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot.clone());
                self.send(BackendMessage::Snapshot(snapshot));
                self.send_status(SyncStatus::Ready);
            }
            Err(e) => {
                tracing::error!(error = %e, "Topology fetch failed");
                self.send_status(SyncStatus::Error(format!("Cannot reach server: {}", e)));
            }
        }
    }

    /// Issue one mutating request, then re-sync.
    ///
    /// The re-sync runs whether or not the server reports the mutation as
    /// successful; only a transport/decoding failure skips it, leaving the
    /// view unchanged except for the error status.
    fn dispatch(&mut self, action: DispatchAction) {
        self.send_status(SyncStatus::Processing);
        tracing::info!(%action, "Dispatching");

        let result = match &action {
            DispatchAction::ToggleLink(id) => self.api.toggle_link(id),
            DispatchAction::LinkUp(id) => self.api.set_link_up(id),
            DispatchAction::LinkDown(id) => self.api.set_link_down(id),
            DispatchAction::FailNode(id) => self.api.fail_node(id),
            DispatchAction::RecoverNode(id) => self.api.recover_node(id),
            DispatchAction::ResetTopology => self.api.reset_topology(),
            DispatchAction::RunScenario(name) => self.api.run_scenario(name),
        };

        match result {
            Ok(_) => self.sync_once(),
            Err(e) => {
                tracing::error!(%action, error = %e, "Dispatch failed");
                self.send_status(SyncStatus::Error(format!("Request failed: {}", e)));
            }
        }
    }

    /// Execute the scripted demo, strictly sequentially.
    ///
    /// A start request while a run is active is ignored. The settle delay
    /// after the final step doubles as the post-completion delay before
    /// controls are re-enabled.
    fn run_demo(&mut self) {
        if self.demo_active {
            tracing::warn!("Demo already running; start request ignored");
            return;
        }
        self.demo_active = true;
        self.send(BackendMessage::DemoStarted);

        let script = demo_script();
        let total = script.len();
        for (index, step) in script.iter().enumerate() {
            if !self.running {
                break;
            }
            tracing::info!(step = index + 1, total, "Demo: {}", step.title);
            self.send(BackendMessage::DemoStep {
                index,
                total,
                phase: StepPhase::Active,
            });

            self.execute_demo_action(&step.action);

            self.send(BackendMessage::DemoStep {
                index,
                total,
                phase: StepPhase::Completed,
            });
            self.settle();
        }

        self.demo_active = false;
        self.send(BackendMessage::DemoFinished);
        tracing::info!("Demo finished");
    }

    /// Resolve a step's display names against the latest snapshot and
    /// dispatch. An unresolvable name degrades to a bare sync so the run
    /// keeps going and the view stays truthful.
    fn execute_demo_action(&mut self, action: &DemoAction) {
        match action {
            DemoAction::Observe => self.sync_once(),
            DemoAction::ResetTopology => self.dispatch(DispatchAction::ResetTopology),
            DemoAction::LinkDown { a, b } => match self.resolve_link(a, b) {
                Some(id) => self.dispatch(DispatchAction::LinkDown(id)),
                None => self.skip_unresolved(&format!("link {}-{}", a, b)),
            },
            DemoAction::LinkUp { a, b } => match self.resolve_link(a, b) {
                Some(id) => self.dispatch(DispatchAction::LinkUp(id)),
                None => self.skip_unresolved(&format!("link {}-{}", a, b)),
            },
            DemoAction::FailNode(name) => match self.resolve_node(name) {
                Some(id) => self.dispatch(DispatchAction::FailNode(id)),
                None => self.skip_unresolved(name),
            },
            DemoAction::RecoverNode(name) => match self.resolve_node(name) {
                Some(id) => self.dispatch(DispatchAction::RecoverNode(id)),
                None => self.skip_unresolved(name),
            },
        }
    }

    fn skip_unresolved(&mut self, what: &str) {
        tracing::warn!("Demo step target {} not found in snapshot; syncing instead", what);
        self.sync_once();
    }

    fn resolve_link(&self, a: &str, b: &str) -> Option<String> {
        self.snapshot
            .as_ref()?
            .link_id_between(a, b)
            .map(String::from)
    }

    fn resolve_node(&self, name: &str) -> Option<String> {
        self.snapshot
            .as_ref()?
            .node_id_by_name(name)
            .map(String::from)
    }

    /// Sleep out the settle delay while absorbing commands, so a second
    /// RunDemo stays a no-op and shutdown stays responsive mid-run.
    fn settle(&mut self) {
        let deadline = Instant::now() + self.settle_delay;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match self.command_rx.recv_timeout(deadline - now) {
                Ok(BackendCommand::RunDemo) => {
                    tracing::warn!("Demo already running; start request ignored");
                }
                Ok(BackendCommand::Shutdown) => {
                    self.running = false;
                    return;
                }
                Ok(cmd) => {
                    tracing::debug!(?cmd, "Command ignored during demo run");
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    self.running = false;
                    return;
                }
            }
        }
    }

    fn send_status(&self, status: SyncStatus) {
        self.send(BackendMessage::Status(status));
    }

    fn send(&self, msg: BackendMessage) {
        if self.message_tx.send(msg).is_err() {
            tracing::warn!("Frontend disconnected; message dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::MockTopologyApi;
    use crate::demo::DEMO_STEP_COUNT;
    use crossbeam_channel::unbounded;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use serde_json::json;

    /// Four-node snapshot matching the demo script's display names
    fn demo_snapshot() -> TopologySnapshot {
        serde_json::from_value(json!({
            "nodes": {
                "n1": {"node_name": "Node1", "state": "ACTIVE", "is_root": true},
                "n2": {"node_name": "Node2", "state": "ACTIVE", "is_root": false},
                "n3": {"node_name": "Node3", "state": "ACTIVE", "is_root": false},
                "n4": {"node_name": "Node4", "state": "ACTIVE", "is_root": false}
            },
            "links": {
                "l12": {"nodes": ["n1", "n2"], "state": "UP", "bandwidth": 100},
                "l13": {"nodes": ["n1", "n3"], "state": "UP", "bandwidth": 100},
                "l24": {"nodes": ["n2", "n4"], "state": "UP", "bandwidth": 100},
                "l34": {"nodes": ["n3", "n4"], "state": "UP", "bandwidth": 10}
            },
            "spanning_tree": ["l12", "l13", "l24"]
        }))
        .unwrap()
    }

    fn test_config() -> AppConfig {
        AppConfig {
            settle_delay: Duration::ZERO,
            ..AppConfig::default()
        }
    }

    fn create_worker(
        api: MockTopologyApi,
    ) -> (
        SyncWorker,
        Receiver<BackendMessage>,
        Sender<BackendCommand>,
    ) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (msg_tx, msg_rx) = unbounded();
        let worker = SyncWorker::new(Box::new(api), cmd_rx, msg_tx, &test_config());
        (worker, msg_rx, cmd_tx)
    }

    fn drain(msg_rx: &Receiver<BackendMessage>) -> Vec<BackendMessage> {
        msg_rx.try_iter().collect()
    }

    #[test]
    fn test_sync_publishes_snapshot_and_ready() {
        let mut api = MockTopologyApi::new();
        api.expect_fetch_topology()
            .times(1)
            .returning(|| Ok(demo_snapshot()));

        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);
        worker.sync_once();

        let messages = drain(&msg_rx);
        assert!(matches!(
            messages[0],
            BackendMessage::Status(SyncStatus::Loading)
        ));
        assert!(matches!(messages[1], BackendMessage::Snapshot(_)));
        assert!(matches!(
            messages[2],
            BackendMessage::Status(SyncStatus::Ready)
        ));
        assert!(worker.snapshot.is_some());
    }

    #[test]
    fn test_sync_failure_keeps_last_snapshot() {
        let mut api = MockTopologyApi::new();
        api.expect_fetch_topology().times(1).returning(|| {
            Err(crate::error::TopoVisError::Api {
                status: 503,
                path: "/api/topology".to_string(),
            })
        });

        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);
        worker.snapshot = Some(demo_snapshot());
        worker.sync_once();

        // Stale-but-available: the old snapshot survives the failed fetch
        assert!(worker.snapshot.is_some());
        let messages = drain(&msg_rx);
        assert!(messages
            .iter()
            .any(|m| matches!(m, BackendMessage::Status(SyncStatus::Error(_)))));
        assert!(!messages
            .iter()
            .any(|m| matches!(m, BackendMessage::Snapshot(_))));
    }

    #[test]
    fn test_dispatch_resyncs_after_mutation() {
        let mut api = MockTopologyApi::new();
        let mut seq = Sequence::new();
        api.expect_toggle_link()
            .with(eq("l12"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_fetch_topology()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(demo_snapshot()));

        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);
        worker.dispatch(DispatchAction::ToggleLink("l12".to_string()));

        let messages = drain(&msg_rx);
        assert!(matches!(
            messages[0],
            BackendMessage::Status(SyncStatus::Processing)
        ));
        assert!(messages
            .iter()
            .any(|m| matches!(m, BackendMessage::Snapshot(_))));
    }

    #[test]
    fn test_dispatch_transport_error_skips_resync() {
        let mut api = MockTopologyApi::new();
        api.expect_fail_node().with(eq("n4")).times(1).returning(|_| {
            Err(crate::error::TopoVisError::Api {
                status: 500,
                path: "/api/nodes/n4/fail".to_string(),
            })
        });
        api.expect_fetch_topology().times(0);

        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);
        worker.dispatch(DispatchAction::FailNode("n4".to_string()));

        let messages = drain(&msg_rx);
        assert!(matches!(
            messages.last(),
            Some(BackendMessage::Status(SyncStatus::Error(_)))
        ));
        assert!(!messages
            .iter()
            .any(|m| matches!(m, BackendMessage::Snapshot(_))));
    }

    #[test]
    fn test_demo_runs_steps_in_order() {
        let mut api = MockTopologyApi::new();
        api.expect_fetch_topology()
            .returning(|| Ok(demo_snapshot()));
        api.expect_reset_topology()
            .times(1)
            .returning(|| Ok(json!({"status": "ok"})));
        api.expect_set_link_down()
            .with(eq("l12"))
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_set_link_up()
            .with(eq("l12"))
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_fail_node()
            .with(eq("n4"))
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_recover_node()
            .with(eq("n4"))
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));

        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);
        worker.run_demo();
        assert!(!worker.demo_active);

        let messages = drain(&msg_rx);
        assert!(matches!(messages[0], BackendMessage::DemoStarted));
        assert!(matches!(messages.last(), Some(BackendMessage::DemoFinished)));

        // Every step reports Active then Completed, in script order
        let phases: Vec<(usize, StepPhase)> = messages
            .iter()
            .filter_map(|m| match m {
                BackendMessage::DemoStep { index, phase, .. } => Some((*index, *phase)),
                _ => None,
            })
            .collect();
        let mut expected = Vec::new();
        for i in 0..DEMO_STEP_COUNT {
            expected.push((i, StepPhase::Active));
            expected.push((i, StepPhase::Completed));
        }
        assert_eq!(phases, expected);
    }

    #[test]
    fn test_demo_start_while_running_is_noop() {
        // No expectations: any API call would panic the mock
        let api = MockTopologyApi::new();
        let (mut worker, msg_rx, _cmd_tx) = create_worker(api);

        worker.demo_active = true;
        worker.run_demo();

        assert!(drain(&msg_rx).is_empty());
        assert!(worker.demo_active);
    }

    #[test]
    fn test_run_demo_command_absorbed_during_settle() {
        let mut api = MockTopologyApi::new();
        api.expect_fetch_topology()
            .returning(|| Ok(demo_snapshot()));
        api.expect_reset_topology()
            .times(1)
            .returning(|| Ok(json!({"status": "ok"})));
        api.expect_set_link_down()
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_set_link_up()
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_fail_node()
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));
        api.expect_recover_node()
            .times(1)
            .returning(|_| Ok(json!({"status": "ok"})));

        let (cmd_tx, cmd_rx) = unbounded();
        let (msg_tx, msg_rx) = unbounded();
        let config = AppConfig {
            settle_delay: Duration::from_millis(1),
            ..AppConfig::default()
        };
        let mut worker = SyncWorker::new(Box::new(api), cmd_rx, msg_tx, &config);

        // Queued before the run: absorbed during the first settle window
        cmd_tx.send(BackendCommand::RunDemo).unwrap();
        worker.run_demo();

        // Exactly one run's worth of messages
        let starts = drain(&msg_rx)
            .iter()
            .filter(|m| matches!(m, BackendMessage::DemoStarted))
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_shutdown_during_settle_aborts_run() {
        let mut api = MockTopologyApi::new();
        api.expect_fetch_topology()
            .returning(|| Ok(demo_snapshot()));
        api.expect_reset_topology()
            .times(1)
            .returning(|| Ok(json!({"status": "ok"})));

        let (cmd_tx, cmd_rx) = unbounded();
        let (msg_tx, msg_rx) = unbounded();
        let config = AppConfig {
            settle_delay: Duration::from_millis(50),
            ..AppConfig::default()
        };
        let mut worker = SyncWorker::new(Box::new(api), cmd_rx, msg_tx, &config);

        cmd_tx.send(BackendCommand::Shutdown).unwrap();
        worker.run_demo();

        assert!(!worker.running);
        // Only the first step ran
        let completed = drain(&msg_rx)
            .iter()
            .filter(|m| {
                matches!(
                    m,
                    BackendMessage::DemoStep {
                        phase: StepPhase::Completed,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(completed, 1);
    }

    #[test]
    fn test_handle_shutdown_command() {
        let api = MockTopologyApi::new();
        let (mut worker, _msg_rx, _cmd_tx) = create_worker(api);
        worker.handle_command(BackendCommand::Shutdown);
        assert!(!worker.running);
    }
}
