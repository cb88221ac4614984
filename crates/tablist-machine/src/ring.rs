//! Circular navigation order over the tab list
//!
//! Arrow navigation wraps at both ends; Home and End land on the endpoints.
//! Lookups resolve a tab by its first occurrence in the list.

use crate::state::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRing {
    tabs: Vec<TabId>,
}

impl TabRing {
    pub fn new<I, T>(tabs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, tab: &str) -> bool {
        self.tabs.iter().any(|t| t == tab)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabId> {
        self.tabs.iter()
    }

    pub fn as_slice(&self) -> &[TabId] {
        &self.tabs
    }

    pub fn into_inner(self) -> Vec<TabId> {
        self.tabs
    }

    pub fn first(&self) -> Option<&TabId> {
        self.tabs.first()
    }

    pub fn last(&self) -> Option<&TabId> {
        self.tabs.last()
    }

    /// Next tab in order, wrapping from the last back to the first
    pub fn after(&self, tab: &str) -> Option<&TabId> {
        let index = self.tabs.iter().position(|t| t == tab)?;
        let next = if index == self.tabs.len() - 1 {
            0
        } else {
            index + 1
        };
        self.tabs.get(next)
    }

    /// Previous tab in order, wrapping from the first to the last
    pub fn before(&self, tab: &str) -> Option<&TabId> {
        let index = self.tabs.iter().position(|t| t == tab)?;
        let previous = if index == 0 {
            self.tabs.len() - 1
        } else {
            index - 1
        };
        self.tabs.get(previous)
    }

    /// Resolve the initially-active tab.
    ///
    /// A missing or unknown request falls back to the first tab; the fallback
    /// is silent, never an error. Returns None only for an empty ring.
    pub fn resolve_active(&self, requested: Option<&str>) -> Option<&TabId> {
        match requested {
            Some(wanted) if self.contains(wanted) => self.tabs.iter().find(|t| *t == wanted),
            _ => self.tabs.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> TabRing {
        TabRing::new(["a", "b", "c"])
    }

    #[test]
    fn test_circular_neighbors() {
        let ring = ring();

        assert_eq!(ring.after("a").unwrap(), "b");
        assert_eq!(ring.after("b").unwrap(), "c");
        assert_eq!(ring.after("c").unwrap(), "a");

        assert_eq!(ring.before("a").unwrap(), "c");
        assert_eq!(ring.before("b").unwrap(), "a");
        assert_eq!(ring.before("c").unwrap(), "b");
    }

    #[test]
    fn test_endpoints() {
        let ring = ring();
        assert_eq!(ring.first().unwrap(), "a");
        assert_eq!(ring.last().unwrap(), "c");
    }

    #[test]
    fn test_single_tab_wraps_to_itself() {
        let ring = TabRing::new(["only"]);
        assert_eq!(ring.after("only").unwrap(), "only");
        assert_eq!(ring.before("only").unwrap(), "only");
    }

    #[test]
    fn test_unknown_tab_has_no_neighbors() {
        let ring = ring();
        assert!(ring.after("z").is_none());
        assert!(ring.before("z").is_none());
    }

    #[test]
    fn test_resolve_active_fallback() {
        let ring = ring();

        assert_eq!(ring.resolve_active(Some("b")).unwrap(), "b");
        assert_eq!(ring.resolve_active(Some("nonexistent")).unwrap(), "a");
        assert_eq!(ring.resolve_active(None).unwrap(), "a");

        let empty = TabRing::new(Vec::<String>::new());
        assert!(empty.resolve_active(Some("a")).is_none());
        assert!(empty.resolve_active(None).is_none());
    }
}
