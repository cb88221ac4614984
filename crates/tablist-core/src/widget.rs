//! Tabs widget facade
//!
//! Ties a built machine description to a running engine instance behind one
//! handle the host embeds. All live state sits behind a write lock, so event
//! dispatch is serialized per widget; clones share the same running machine.

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use tablist_engine::{Machine, MachineSnapshot};
use tablist_machine::{StateRef, TabAttributes, TabEvent, TabId, TabMachineBuilder};

use crate::config::TabsConfig;
use crate::error::CoreError;
use crate::Result;

pub struct TabsWidget {
    /// Instance id for log correlation across widgets
    id: String,
    config: TabsConfig,
    machine: Arc<RwLock<Machine>>,
}

impl TabsWidget {
    /// Build the machine for `tabs` and start it on the first tab.
    pub fn new<I, T>(tabs: I, config: TabsConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        Self::build(tabs, None, config)
    }

    /// Build the machine with an explicit initially-active tab.
    ///
    /// An active tab that is not in the list silently resolves to the first
    /// tab, matching the machine builder's fallback.
    pub fn with_active_tab<I, T>(tabs: I, active_tab: impl Into<TabId>, config: TabsConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        Self::build(tabs, Some(active_tab.into()), config)
    }

    fn build<I, T>(tabs: I, active_tab: Option<TabId>, config: TabsConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        let mut builder = TabMachineBuilder::new(tabs)
            .orientation(config.orientation)
            .activation(config.activation);
        if let Some(tab) = active_tab {
            builder = builder.active_tab(tab);
        }

        let description = builder.build().ok_or(CoreError::EmptyTabs)?;
        let id = Uuid::new_v4().to_string();

        tracing::info!(
            widget_id = %id,
            tabs = description.config.tabs.len(),
            mode = %description.config.mode,
            "Created tabs widget"
        );

        Ok(Self {
            id,
            config,
            machine: Arc::new(RwLock::new(Machine::new(description))),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Feed one translated input event to the machine.
    ///
    /// Returns true iff the machine took a transition.
    pub fn dispatch(&self, event: &TabEvent) -> bool {
        let handled = self.machine.write().dispatch(event);

        if handled {
            tracing::debug!(widget_id = %self.id, event = ?event, "Widget handled event");
        }

        handled
    }

    /// Current qualified machine state
    pub fn current_state(&self) -> StateRef {
        self.machine.read().state().clone()
    }

    /// Tab holding keyboard focus, if any
    pub fn focused_tab(&self) -> Option<TabId> {
        self.machine.read().focused_tab().cloned()
    }

    /// Selected tab per the shared context (None in manual mode)
    pub fn selected_tab(&self) -> Option<TabId> {
        self.machine.read().selected_tab().cloned()
    }

    /// Presentation attributes to reflect onto one tab element.
    ///
    /// None for unknown tabs and for every tab of a manual-mode widget,
    /// where attribute bookkeeping belongs to the host.
    pub fn attributes(&self, tab: &str) -> Option<TabAttributes> {
        self.machine.read().attributes(tab).cloned()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        self.machine.read().snapshot()
    }

    /// Snapshot serialized for persistence or a process boundary
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

impl Clone for TabsWidget {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            config: self.config,
            machine: Arc::clone(&self.machine),
        }
    }
}
