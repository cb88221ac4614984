//! Machine description
//!
//! The built artifact handed to the execution engine: per-tab sub-state
//! graphs, the root event-routing table, the shared presentation context
//! (automatic mode), and the configuration the activation synchronizer reads.
//! The description is immutable once built and safe to share read-only across
//! widget instances.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::event::{ActivationMode, Orientation, TabEvent};
use crate::state::{StateRef, TabAttributes, TabId, TabPhase};

/// Machine identifier carried by every built description
pub const MACHINE_ID: &str = "wai-aria-tabs";

/// Named entry actions a tab node can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionId {
    /// Rewrite the shared context so the entered tab is the one selected tab
    Activate,
}

impl ActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::Activate => "activate",
        }
    }
}

/// One transition inside a tab node.
///
/// `from: None` marks a tab-level transition that applies from any branch of
/// the node (manual-mode Click); otherwise the transition is attached to a
/// single leaf. Targets are qualified, so cross-tab jumps and local
/// focused/blurred moves share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Option<TabPhase>,
    pub event: TabEvent,
    pub target: StateRef,
}

/// Sub-state graph for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNode {
    pub id: TabId,
    /// Branch entered when the machine starts on this tab
    pub initial: TabPhase,
    /// Actions run whenever a dispatch enters this node
    pub entry: Vec<ActionId>,
    pub transitions: Vec<Transition>,
}

impl TabNode {
    /// Transition taken for `event` while this node sits at `current`.
    ///
    /// Tab-level transitions win over leaf-attached ones.
    pub fn transition_for(&self, current: TabPhase, event: &TabEvent) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from.is_none() && t.event == *event)
            .or_else(|| {
                self.transitions
                    .iter()
                    .find(|t| t.from == Some(current) && t.event == *event)
            })
    }
}

/// Shared presentation context: per-tab roving tabindex and ARIA attributes.
pub type TabContext = HashMap<TabId, TabAttributes>;

/// Inputs the machine was built from.
///
/// Passed explicitly into the activation synchronizer so the action stays a
/// plain function instead of a closure over the tab list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Tab ids in navigation order
    pub tabs: Vec<TabId>,
    pub orientation: Orientation,
    pub mode: ActivationMode,
}

impl MachineConfig {
    pub fn contains(&self, tab: &str) -> bool {
        self.tabs.iter().any(|t| t == tab)
    }
}

/// Complete machine description produced by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabMachine {
    pub id: String,
    pub config: MachineConfig,
    /// Leaf the machine starts in: the resolved active tab's initial branch
    pub initial: StateRef,
    /// Per-tab sub-state graphs keyed by tab id
    pub states: HashMap<TabId, TabNode>,
    /// Root routing table: activation event target per tab, reachable from
    /// anywhere in the machine
    pub on: HashMap<TabId, StateRef>,
    /// Initial shared context; present only in automatic mode
    pub context: Option<TabContext>,
}

impl TabMachine {
    pub fn node(&self, tab: &str) -> Option<&TabNode> {
        self.states.get(tab)
    }

    /// Routing-table target for a tab's global activation event
    pub fn route(&self, tab: &str) -> Option<&StateRef> {
        self.on.get(tab)
    }
}
