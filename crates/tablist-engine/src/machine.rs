//! Running machine
//!
//! Owns the live state for one widget instance: the current qualified leaf
//! and, in automatic mode, the shared presentation context. The description
//! itself is never mutated.

use serde::{Deserialize, Serialize};

use tablist_machine::{
    sync_activation, ActionId, StateRef, TabAttributes, TabContext, TabEvent, TabId, TabMachine,
};

/// Serializable view of a machine's live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub state: StateRef,
    pub context: Option<TabContext>,
}

/// A machine description plus its live state.
pub struct Machine {
    description: TabMachine,
    state: StateRef,
    context: Option<TabContext>,
}

impl Machine {
    /// Start the machine at the description's initial leaf with its initial
    /// context.
    pub fn new(description: TabMachine) -> Self {
        let state = description.initial.clone();
        let context = description.context.clone();

        tracing::debug!(machine = %description.id, initial = %state, "Machine started");

        Self {
            description,
            state,
            context,
        }
    }

    pub fn description(&self) -> &TabMachine {
        &self.description
    }

    /// Current qualified leaf
    pub fn state(&self) -> &StateRef {
        &self.state
    }

    pub fn context(&self) -> Option<&TabContext> {
        self.context.as_ref()
    }

    /// Tab the machine currently sits on (focused or not)
    pub fn current_tab(&self) -> &TabId {
        &self.state.tab
    }

    /// Tab holding keyboard focus, if any
    pub fn focused_tab(&self) -> Option<&TabId> {
        if self.state.phase.is_focused() {
            Some(&self.state.tab)
        } else {
            None
        }
    }

    /// Selected tab per the shared context.
    ///
    /// None in manual mode, where selection bookkeeping belongs to the host.
    pub fn selected_tab(&self) -> Option<&TabId> {
        let context = self.context.as_ref()?;
        context
            .iter()
            .find(|(_, attributes)| attributes.aria.selected)
            .map(|(tab, _)| tab)
    }

    /// Presentation attributes for one tab (automatic mode only)
    pub fn attributes(&self, tab: &str) -> Option<&TabAttributes> {
        self.context.as_ref()?.get(tab)
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            state: self.state.clone(),
            context: self.context.clone(),
        }
    }

    /// Process one event to completion.
    ///
    /// Returns true iff a transition was taken. Events with no matching
    /// transition in the current leaf, and activation events naming an
    /// unknown tab, are silently ignored.
    pub fn dispatch(&mut self, event: &TabEvent) -> bool {
        let target = match event {
            TabEvent::Activate(tab) => self.description.route(tab).cloned(),
            _ => self
                .description
                .node(&self.state.tab)
                .and_then(|node| node.transition_for(self.state.phase, event))
                .map(|t| t.target.clone()),
        };

        let target = match target {
            Some(target) => target,
            None => {
                tracing::debug!(state = %self.state, event = ?event, "Ignored event");
                return false;
            }
        };

        // Routing-table activations always re-enter the target node, even
        // when it is the current one; local focused/blurred moves never do.
        let enters_node =
            target.tab != self.state.tab || matches!(event, TabEvent::Activate(_));

        tracing::debug!(
            from = %self.state,
            to = %target,
            event = ?event,
            "Tab machine transition"
        );

        self.state = target;

        if enters_node {
            self.run_entry_actions();
        }

        true
    }

    fn run_entry_actions(&mut self) {
        let node = match self.description.node(&self.state.tab) {
            Some(node) => node,
            None => return,
        };

        for action in &node.entry {
            match action {
                ActionId::Activate => {
                    if let Some(current) = self.context.take() {
                        let next =
                            sync_activation(&self.description.config, &current, &self.state.tab);
                        self.context = Some(next);
                    }
                }
            }
        }
    }
}
