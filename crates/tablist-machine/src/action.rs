//! Activation synchronizer
//!
//! The one named action an automatic-mode machine carries. Rewrites the whole
//! shared context so the designated tab is the single selected one; every
//! other tab drops to `tabindex = -1` with cleared ARIA flags. Rewriting all
//! tabs rather than diffing old/new keeps the action idempotent.

use crate::machine::{MachineConfig, TabContext};
use crate::state::TabAttributes;

/// Recompute every tab's presentation attributes for a new selected tab.
///
/// A target that is not among the configured tabs leaves the context
/// untouched; stale or foreign activation events must not corrupt the
/// single-selected-tab invariant.
pub fn sync_activation(config: &MachineConfig, context: &TabContext, target: &str) -> TabContext {
    if !config.contains(target) {
        return context.clone();
    }

    context
        .keys()
        .map(|tab| (tab.clone(), TabAttributes::for_tab(tab, tab == target)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ActivationMode, Orientation};
    use crate::state::TabId;

    fn config() -> MachineConfig {
        MachineConfig {
            tabs: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            orientation: Orientation::Horizontal,
            mode: ActivationMode::Automatic,
        }
    }

    fn context(selected: &str) -> TabContext {
        ["a", "b", "c"]
            .into_iter()
            .map(|tab| {
                (
                    TabId::from(tab),
                    TabAttributes::for_tab(tab, tab == selected),
                )
            })
            .collect()
    }

    #[test]
    fn test_sync_moves_selection() {
        let next = sync_activation(&config(), &context("a"), "b");

        assert_eq!(next["b"].tabindex, 0);
        assert!(next["b"].aria.selected);
        assert!(next["b"].aria.expanded);

        for tab in ["a", "c"] {
            assert_eq!(next[tab].tabindex, -1);
            assert!(!next[tab].aria.selected);
            assert!(!next[tab].aria.expanded);
        }
    }

    #[test]
    fn test_sync_preserves_controls() {
        let next = sync_activation(&config(), &context("a"), "c");
        for tab in ["a", "b", "c"] {
            assert_eq!(next[tab].aria.controls, tab);
        }
    }

    #[test]
    fn test_foreign_target_is_a_no_op() {
        let current = context("a");
        let next = sync_activation(&config(), &current, "nonexistent");
        assert_eq!(next, current);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let once = sync_activation(&config(), &context("a"), "b");
        let twice = sync_activation(&config(), &once, "b");
        assert_eq!(once, twice);
    }
}
