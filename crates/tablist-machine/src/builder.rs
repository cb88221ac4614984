//! Machine synthesis
//!
//! A single pass over the tab list produces the full description: the shared
//! context entry, the routing-table entry, and the sub-state graph for each
//! tab, with cross-tab links resolved against the circular navigation ring.

use std::collections::HashMap;

use crate::event::{ActivationMode, Orientation, TabEvent};
use crate::machine::{
    ActionId, MachineConfig, TabContext, TabMachine, TabNode, Transition, MACHINE_ID,
};
use crate::ring::TabRing;
use crate::state::{StateRef, TabAttributes, TabId, TabPhase};

/// Builds a [`TabMachine`] from an ordered tab list.
///
/// Orientation defaults to horizontal and activation to automatic; an absent
/// or unknown active tab silently resolves to the first tab. An empty tab
/// list yields no machine at all.
#[derive(Debug, Clone)]
pub struct TabMachineBuilder {
    tabs: Vec<TabId>,
    active_tab: Option<TabId>,
    orientation: Orientation,
    mode: ActivationMode,
}

impl TabMachineBuilder {
    pub fn new<I, T>(tabs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            active_tab: None,
            orientation: Orientation::default(),
            mode: ActivationMode::default(),
        }
    }

    /// Tab that starts out selected (falls back to the first tab if unknown)
    pub fn active_tab(mut self, tab: impl Into<TabId>) -> Self {
        self.active_tab = Some(tab.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn activation(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Synthesize the machine description.
    ///
    /// Returns None when the tab list is empty; a tablist with zero tabs has
    /// nothing to navigate and must not be rendered.
    pub fn build(self) -> Option<TabMachine> {
        let Self {
            tabs,
            active_tab,
            orientation,
            mode,
        } = self;

        let ring = TabRing::new(tabs);
        let active = ring.resolve_active(active_tab.as_deref())?.clone();
        let first = ring.first()?.clone();
        let last = ring.last()?.clone();

        let arrow_after = orientation.arrow_after();
        let arrow_before = orientation.arrow_before();
        let focused_phase = mode.focused_phase();

        let mut states: HashMap<TabId, TabNode> = HashMap::with_capacity(ring.len());
        let mut on: HashMap<TabId, StateRef> = HashMap::with_capacity(ring.len());
        let mut context: Option<TabContext> = match mode {
            ActivationMode::Automatic => Some(TabContext::with_capacity(ring.len())),
            ActivationMode::Manual => None,
        };

        for tab in ring.iter() {
            let is_active = *tab == active;
            let after = ring.after(tab)?.clone();
            let before = ring.before(tab)?.clone();

            if let Some(ctx) = context.as_mut() {
                ctx.insert(tab.clone(), TabAttributes::for_tab(tab, is_active));
            }

            on.insert(tab.clone(), StateRef::new(tab.clone(), focused_phase));

            let mut transitions = Vec::new();

            if mode == ActivationMode::Manual {
                // Activation trigger, decoupled from arrow navigation: lands
                // on this tab's focused leaf from whichever branch holds.
                transitions.push(Transition {
                    from: None,
                    event: TabEvent::Click,
                    target: StateRef::new(tab.clone(), TabPhase::Focused),
                });
            }

            // Directional navigation only leaves the focused leaf.
            transitions.push(Transition {
                from: Some(focused_phase),
                event: arrow_after.clone(),
                target: StateRef::new(after, focused_phase),
            });
            transitions.push(Transition {
                from: Some(focused_phase),
                event: arrow_before.clone(),
                target: StateRef::new(before, focused_phase),
            });
            transitions.push(Transition {
                from: Some(focused_phase),
                event: TabEvent::Home,
                target: StateRef::new(first.clone(), focused_phase),
            });
            transitions.push(Transition {
                from: Some(focused_phase),
                event: TabEvent::End,
                target: StateRef::new(last.clone(), focused_phase),
            });

            match mode {
                ActivationMode::Automatic => {
                    transitions.push(Transition {
                        from: Some(TabPhase::ActiveFocused),
                        event: TabEvent::Blur,
                        target: StateRef::new(tab.clone(), TabPhase::ActiveBlurred),
                    });
                    // Focus is only reachable while already active; inactive
                    // tabs wait for the global activation event.
                    transitions.push(Transition {
                        from: Some(TabPhase::ActiveBlurred),
                        event: TabEvent::Focus,
                        target: StateRef::new(tab.clone(), TabPhase::ActiveFocused),
                    });
                }
                ActivationMode::Manual => {
                    transitions.push(Transition {
                        from: Some(TabPhase::Focused),
                        event: TabEvent::Blur,
                        target: StateRef::new(tab.clone(), TabPhase::Blurred),
                    });
                }
            }

            let entry = match mode {
                ActivationMode::Automatic => vec![ActionId::Activate],
                ActivationMode::Manual => Vec::new(),
            };

            states.insert(
                tab.clone(),
                TabNode {
                    id: tab.clone(),
                    initial: mode.initial_phase(is_active),
                    entry,
                    transitions,
                },
            );
        }

        tracing::debug!(
            tabs = ring.len(),
            mode = %mode,
            orientation = %orientation,
            active = %active,
            "Built tab machine"
        );

        let initial = StateRef::new(active, mode.initial_phase(true));

        Some(TabMachine {
            id: MACHINE_ID.to_string(),
            config: MachineConfig {
                tabs: ring.into_inner(),
                orientation,
                mode,
            },
            initial,
            states,
            on,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automatic_machine() -> TabMachine {
        TabMachineBuilder::new(["a", "b", "c"])
            .activation(ActivationMode::Automatic)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_tabs_yield_no_machine() {
        assert!(TabMachineBuilder::new(Vec::<String>::new()).build().is_none());
    }

    #[test]
    fn test_unknown_active_tab_falls_back_to_first() {
        let machine = TabMachineBuilder::new(["a", "b"])
            .active_tab("nonexistent")
            .build()
            .unwrap();

        assert_eq!(machine.initial.tab, "a");
        let context = machine.context.unwrap();
        assert!(context["a"].aria.selected);
        assert!(!context["b"].aria.selected);
    }

    #[test]
    fn test_exactly_one_tab_selected_after_construction() {
        let machine = TabMachineBuilder::new(["a", "b", "c"])
            .active_tab("b")
            .build()
            .unwrap();

        let context = machine.context.unwrap();
        let selected: Vec<_> = context.values().filter(|a| a.aria.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].aria.controls, "b");
        assert_eq!(selected[0].tabindex, 0);
        assert!(selected[0].aria.expanded);
    }

    #[test]
    fn test_machine_shape() {
        let machine = automatic_machine();

        assert_eq!(machine.id, MACHINE_ID);
        assert_eq!(machine.states.len(), 3);
        assert_eq!(machine.on.len(), 3);
        assert_eq!(machine.initial, StateRef::new("a", TabPhase::ActiveBlurred));

        // Active tab starts in the active branch, the rest inactive.
        assert_eq!(machine.node("a").unwrap().initial, TabPhase::ActiveBlurred);
        assert_eq!(machine.node("b").unwrap().initial, TabPhase::Inactive);
        assert_eq!(machine.node("c").unwrap().initial, TabPhase::Inactive);
    }

    #[test]
    fn test_routing_table_targets_focused_leaves() {
        let machine = automatic_machine();
        for tab in ["a", "b", "c"] {
            assert_eq!(
                machine.route(tab).unwrap(),
                &StateRef::new(tab, TabPhase::ActiveFocused)
            );
        }

        let manual = TabMachineBuilder::new(["a", "b"])
            .activation(ActivationMode::Manual)
            .build()
            .unwrap();
        assert_eq!(
            manual.route("b").unwrap(),
            &StateRef::new("b", TabPhase::Focused)
        );
    }

    #[test]
    fn test_horizontal_arrow_links_wrap() {
        let machine = automatic_machine();
        let node = machine.node("c").unwrap();

        let next = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::ArrowRight)
            .unwrap();
        assert_eq!(next.target, StateRef::new("a", TabPhase::ActiveFocused));

        let node = machine.node("a").unwrap();
        let previous = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::ArrowLeft)
            .unwrap();
        assert_eq!(previous.target, StateRef::new("c", TabPhase::ActiveFocused));
    }

    #[test]
    fn test_vertical_orientation_uses_up_down() {
        let machine = TabMachineBuilder::new(["a", "b"])
            .orientation(Orientation::Vertical)
            .build()
            .unwrap();
        let node = machine.node("a").unwrap();

        let down = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::ArrowDown)
            .unwrap();
        assert_eq!(down.target.tab, "b");

        // Horizontal arrows are not wired in a vertical machine.
        assert!(node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::ArrowRight)
            .is_none());
    }

    #[test]
    fn test_home_end_anchors() {
        let machine = automatic_machine();
        let node = machine.node("b").unwrap();

        let home = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::Home)
            .unwrap();
        assert_eq!(home.target, StateRef::new("a", TabPhase::ActiveFocused));

        let end = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::End)
            .unwrap();
        assert_eq!(end.target, StateRef::new("c", TabPhase::ActiveFocused));
    }

    #[test]
    fn test_inactive_branch_has_no_navigation() {
        let machine = automatic_machine();
        let node = machine.node("b").unwrap();

        for event in [
            TabEvent::ArrowRight,
            TabEvent::ArrowLeft,
            TabEvent::Home,
            TabEvent::End,
            TabEvent::Focus,
            TabEvent::Blur,
        ] {
            assert!(node.transition_for(TabPhase::Inactive, &event).is_none());
        }
    }

    #[test]
    fn test_focus_blur_pair() {
        let machine = automatic_machine();
        let node = machine.node("a").unwrap();

        let blur = node
            .transition_for(TabPhase::ActiveFocused, &TabEvent::Blur)
            .unwrap();
        assert_eq!(blur.target, StateRef::new("a", TabPhase::ActiveBlurred));

        let focus = node
            .transition_for(TabPhase::ActiveBlurred, &TabEvent::Focus)
            .unwrap();
        assert_eq!(focus.target, StateRef::new("a", TabPhase::ActiveFocused));
    }

    #[test]
    fn test_manual_mode_shape() {
        let machine = TabMachineBuilder::new(["a", "b"])
            .activation(ActivationMode::Manual)
            .build()
            .unwrap();

        // No shared context and no entry actions in manual mode.
        assert!(machine.context.is_none());
        assert!(machine.node("a").unwrap().entry.is_empty());

        // Every tab starts blurred; the machine starts on the active tab.
        assert_eq!(machine.initial, StateRef::new("a", TabPhase::Blurred));
        assert_eq!(machine.node("b").unwrap().initial, TabPhase::Blurred);
    }

    #[test]
    fn test_manual_click_reaches_focused_from_any_branch() {
        let machine = TabMachineBuilder::new(["a", "b"])
            .activation(ActivationMode::Manual)
            .build()
            .unwrap();
        let node = machine.node("a").unwrap();

        for phase in [TabPhase::Focused, TabPhase::Blurred] {
            let click = node.transition_for(phase, &TabEvent::Click).unwrap();
            assert_eq!(click.target, StateRef::new("a", TabPhase::Focused));
        }
    }

    #[test]
    fn test_automatic_entry_action() {
        let machine = automatic_machine();
        assert_eq!(machine.node("b").unwrap().entry, vec![ActionId::Activate]);
    }
}
