//! Topology server API seam
//!
//! The sync worker talks to the server through this trait so tests can
//! substitute a mock transport. Mutation endpoints return loose JSON: the
//! client never interprets the body beyond success/failure, because it
//! re-syncs unconditionally after every accepted mutation.

use crate::error::Result;
use crate::types::TopologySnapshot;
use serde_json::Value;

/// Unified interface to the topology server.
///
/// Implementations must be `Send` so the worker can own one on its thread.
#[cfg_attr(test, mockall::automock)]
pub trait TopologyApi: Send {
    /// Fetch the full topology snapshot
    fn fetch_topology(&self) -> Result<TopologySnapshot>;

    /// Flip a link between up and down
    fn toggle_link(&self, link_id: &str) -> Result<Value>;

    /// Force a link up
    fn set_link_up(&self, link_id: &str) -> Result<Value>;

    /// Force a link down
    fn set_link_down(&self, link_id: &str) -> Result<Value>;

    /// Mark a node failed
    fn fail_node(&self, node_id: &str) -> Result<Value>;

    /// Mark a node active again
    fn recover_node(&self, node_id: &str) -> Result<Value>;

    /// Restore the baseline topology
    fn reset_topology(&self) -> Result<Value>;

    /// Trigger a named canned scenario on the server
    fn run_scenario(&self, name: &str) -> Result<Value>;
}
