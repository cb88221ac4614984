//! Per-tab state variants and presentation attributes
//!
//! Each tab's nested sub-state graph collapses to a tagged variant: automatic
//! activation uses `ActiveFocused`/`ActiveBlurred`/`Inactive`, manual
//! activation uses the flat `Focused`/`Blurred` pair. A qualified state
//! target is a tab id plus one of these variants.

use serde::{Deserialize, Serialize};

/// Identifier naming one tab within a widget instance.
///
/// List order defines navigation order; the first and last entries are the
/// Home/End anchors.
pub type TabId = String;

/// Leaf position inside one tab's sub-state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPhase {
    /// Automatic mode: selected and holding keyboard focus
    ActiveFocused,
    /// Automatic mode: selected, keyboard focus elsewhere
    ActiveBlurred,
    /// Automatic mode: not selected; unreachable by arrow navigation
    Inactive,
    /// Manual mode: holding keyboard focus
    Focused,
    /// Manual mode: keyboard focus elsewhere
    Blurred,
}

impl TabPhase {
    /// Whether this leaf holds keyboard focus
    pub fn is_focused(&self) -> bool {
        matches!(self, TabPhase::ActiveFocused | TabPhase::Focused)
    }

    /// Whether this leaf sits inside the automatic-mode active branch
    pub fn is_active(&self) -> bool {
        matches!(self, TabPhase::ActiveFocused | TabPhase::ActiveBlurred)
    }

    /// Dotted path of the leaf within its tab state
    pub fn as_str(&self) -> &'static str {
        match self {
            TabPhase::ActiveFocused => "active.focused",
            TabPhase::ActiveBlurred => "active.blurred",
            TabPhase::Inactive => "inactive",
            TabPhase::Focused => "focused",
            TabPhase::Blurred => "blurred",
        }
    }
}

impl std::fmt::Display for TabPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualified state target: a leaf in a named tab's subtree.
///
/// Cross-tab transitions ("go to the focused leaf of the next tab") and the
/// root routing table both address leaves this way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRef {
    pub tab: TabId,
    pub phase: TabPhase,
}

impl StateRef {
    pub fn new(tab: impl Into<TabId>, phase: TabPhase) -> Self {
        Self {
            tab: tab.into(),
            phase,
        }
    }
}

impl std::fmt::Display for StateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tab, self.phase)
    }
}

/// Roving-tabindex value plus ARIA attributes one tab exposes.
///
/// Recomputed wholesale by the activation synchronizer whenever the selected
/// tab changes; exactly one tab carries `tabindex = 0` at any moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabAttributes {
    /// 0 for the selected tab, -1 for every sibling
    pub tabindex: i32,
    pub aria: AriaAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriaAttributes {
    /// Id of the panel this tab controls (the tab's own id)
    pub controls: TabId,
    pub selected: bool,
    /// Mirrors `selected` for this widget's panel-disclosure semantics
    pub expanded: bool,
}

impl TabAttributes {
    pub fn for_tab(tab: &str, selected: bool) -> Self {
        Self {
            tabindex: if selected { 0 } else { -1 },
            aria: AriaAttributes {
                controls: tab.to_string(),
                selected,
                expanded: selected,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(TabPhase::ActiveFocused.is_focused());
        assert!(TabPhase::Focused.is_focused());
        assert!(!TabPhase::ActiveBlurred.is_focused());
        assert!(!TabPhase::Inactive.is_focused());

        assert!(TabPhase::ActiveFocused.is_active());
        assert!(TabPhase::ActiveBlurred.is_active());
        assert!(!TabPhase::Inactive.is_active());
        assert!(!TabPhase::Focused.is_active());
    }

    #[test]
    fn test_state_ref_display() {
        let target = StateRef::new("panel-1", TabPhase::ActiveFocused);
        assert_eq!(target.to_string(), "panel-1.active.focused");

        let target = StateRef::new("panel-1", TabPhase::Focused);
        assert_eq!(target.to_string(), "panel-1.focused");
    }

    #[test]
    fn test_attributes_for_tab() {
        let selected = TabAttributes::for_tab("overview", true);
        assert_eq!(selected.tabindex, 0);
        assert_eq!(selected.aria.controls, "overview");
        assert!(selected.aria.selected);
        assert!(selected.aria.expanded);

        let sibling = TabAttributes::for_tab("details", false);
        assert_eq!(sibling.tabindex, -1);
        assert_eq!(sibling.aria.controls, "details");
        assert!(!sibling.aria.selected);
        assert!(!sibling.aria.expanded);
    }
}
