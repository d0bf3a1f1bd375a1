//! Scripted failure/recovery demonstration
//!
//! The demo is a fixed ordered script of seven steps. Each step pairs a
//! title/description with an action (one mutating dispatch, or a bare sync
//! for observation steps) and an expected-outcome string shown to the
//! operator. The sync worker executes the script strictly sequentially with
//! a settle delay after every step.
//!
//! Steps name nodes and links by display name; the worker resolves them to
//! ids against its latest snapshot at execution time, so the script survives
//! id churn across a topology reset.

/// Number of steps in the scripted demo
pub const DEMO_STEP_COUNT: usize = 7;

/// What a demo step does when executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAction {
    /// Restore the baseline topology
    ResetTopology,
    /// No mutation; force a sync so the operator sees the current state
    Observe,
    /// Force the link between two named nodes down
    LinkDown {
        a: &'static str,
        b: &'static str,
    },
    /// Force the link between two named nodes up
    LinkUp {
        a: &'static str,
        b: &'static str,
    },
    /// Mark a named node failed
    FailNode(&'static str),
    /// Mark a named node active again
    RecoverNode(&'static str),
}

/// One step of the scripted demo
#[derive(Debug, Clone)]
pub struct DemoStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Shown while the step is pending/active; reinterpreted as the result
    /// once the step completes
    pub expected: &'static str,
    pub action: DemoAction,
}

/// The fixed demo script.
pub fn demo_script() -> Vec<DemoStep> {
    vec![
        DemoStep {
            title: "Reset topology",
            description: "Restore the baseline four-node topology",
            expected: "All nodes active, spanning tree over primary links",
            action: DemoAction::ResetTopology,
        },
        DemoStep {
            title: "Observe baseline",
            description: "Fetch and display the healthy topology",
            expected: "Green spanning-tree links, grey backups",
            action: DemoAction::Observe,
        },
        DemoStep {
            title: "Fail a spanning-tree link",
            description: "Force the Node1-Node2 link down",
            expected: "Traffic reroutes onto a backup link",
            action: DemoAction::LinkDown {
                a: "Node1",
                b: "Node2",
            },
        },
        DemoStep {
            title: "Observe reconvergence",
            description: "Fetch the recomputed spanning tree",
            expected: "Spanning tree no longer uses the failed link",
            action: DemoAction::Observe,
        },
        DemoStep {
            title: "Restore the link",
            description: "Force the Node1-Node2 link back up",
            expected: "Link rejoins as a tree or backup link",
            action: DemoAction::LinkUp {
                a: "Node1",
                b: "Node2",
            },
        },
        DemoStep {
            title: "Fail a node",
            description: "Mark Node4 as failed",
            expected: "Adjacent links go down, tree recomputes around it",
            action: DemoAction::FailNode("Node4"),
        },
        DemoStep {
            title: "Recover the node",
            description: "Mark Node4 active again",
            expected: "Topology returns to full redundancy",
            action: DemoAction::RecoverNode("Node4"),
        },
    ]
}

/// Execution phase of one step, as reported to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    Pending,
    Active,
    Completed,
}

/// Frontend mirror of an in-flight demo run.
///
/// Exists only while the orchestrator executes; dropped on completion.
#[derive(Debug, Clone)]
pub struct DemoRun {
    pub steps: Vec<DemoStep>,
    pub phases: Vec<StepPhase>,
}

impl DemoRun {
    pub fn new() -> Self {
        let steps = demo_script();
        let phases = vec![StepPhase::Pending; steps.len()];
        Self { steps, phases }
    }

    /// Record a phase transition reported by the worker
    pub fn apply(&mut self, index: usize, phase: StepPhase) {
        if let Some(slot) = self.phases.get_mut(index) {
            *slot = phase;
        }
    }

    /// Completed steps / total, for the progress bar
    pub fn progress(&self) -> f32 {
        let completed = self
            .phases
            .iter()
            .filter(|p| **p == StepPhase::Completed)
            .count();
        completed as f32 / self.steps.len() as f32
    }

    /// Index of the currently active step, if any
    pub fn active_step(&self) -> Option<usize> {
        self.phases.iter().position(|p| *p == StepPhase::Active)
    }
}

impl Default for DemoRun {
    fn default() -> Self {
        Self::new()
    }
}
