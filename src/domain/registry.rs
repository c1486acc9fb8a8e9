//! Static mapping from [`ViewId`] to a renderer.
//!
//! Generic over the renderer so the mapping can be exercised without a UI
//! runtime. The default entry is required at construction, which keeps
//! [`ViewRegistry::resolve`] total.

use crate::domain::models::ViewId;
use crate::domain::navigation::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEntry<R> {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: &'static str,
    pub render: R,
}

impl<R> ViewEntry<R> {
    /// Entry using the view's own display name and icon
    pub fn new(id: ViewId, render: R) -> Self {
        Self {
            id,
            label: id.display_name(),
            icon: id.icon(),
            render,
        }
    }
}

/// Panel metadata for one navigable destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub struct ViewRegistry<R> {
    default: ViewId,
    slots: [Option<ViewEntry<R>>; ViewId::COUNT],
}

impl<R: Copy> ViewRegistry<R> {
    pub fn new(default: ViewEntry<R>) -> Self {
        let mut slots = [None; ViewId::COUNT];
        let id = default.id;
        slots[id.index()] = Some(default);
        Self { default: id, slots }
    }

    /// Register `entry`, replacing any entry with the same id
    pub fn with(mut self, entry: ViewEntry<R>) -> Self {
        self.slots[entry.id.index()] = Some(entry);
        self
    }

    pub fn default_view(&self) -> ViewId {
        self.default
    }

    pub fn lookup(&self, id: ViewId) -> Option<&ViewEntry<R>> {
        self.slots[id.index()].as_ref()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.lookup(id).is_some()
    }

    /// Entry for the active view, or the default entry when it is missing
    pub fn resolve(&self, state: &NavigationState) -> &ViewEntry<R> {
        self.resolve_id(state.active_view())
    }

    pub fn resolve_id(&self, id: ViewId) -> &ViewEntry<R> {
        match self.lookup(id) {
            Some(entry) => entry,
            None => {
                tracing::warn!(view = id.as_str(), fallback = self.default.as_str(), "View not registered, using default");
                self.default_entry()
            }
        }
    }

    /// Resolve a raw identifier; anything unknown yields the default entry
    pub fn resolve_key(&self, key: &str) -> &ViewEntry<R> {
        match key.parse::<ViewId>() {
            Ok(id) => self.resolve_id(id),
            Err(_) => {
                tracing::warn!(key = key, fallback = self.default.as_str(), "Unknown view identifier, using default");
                self.default_entry()
            }
        }
    }

    /// Registered destinations in panel order
    pub fn destinations(&self) -> Vec<Destination> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| Destination {
                id: entry.id,
                label: entry.label,
                icon: entry.icon,
            })
            .collect()
    }

    fn default_entry(&self) -> &ViewEntry<R> {
        match &self.slots[self.default.index()] {
            Some(entry) => entry,
            // `new` fills the default slot and `with` can only overwrite it
            None => unreachable!("default view slot is always filled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_registry() -> ViewRegistry<&'static str> {
        ViewRegistry::new(ViewEntry::new(ViewId::Home, "home-body"))
            .with(ViewEntry::new(ViewId::Products, "products-body"))
            .with(ViewEntry::new(ViewId::News, "news-body"))
            .with(ViewEntry::new(ViewId::Tasks, "tasks-body"))
    }

    fn state_on(view: ViewId) -> NavigationState {
        let mut state = NavigationState::new();
        state.select_and_close(view);
        state
    }

    #[test]
    fn test_resolve_registered_views() {
        let registry = full_registry();
        for view in ViewId::ALL {
            assert_eq!(registry.resolve(&state_on(view)).id, view);
        }
        assert_eq!(registry.resolve(&state_on(ViewId::News)).render, "news-body");
    }

    #[test]
    fn test_unregistered_view_falls_back_to_default() {
        let registry = ViewRegistry::new(ViewEntry::new(ViewId::Home, "home-body"))
            .with(ViewEntry::new(ViewId::Tasks, "tasks-body"));

        let fallback = registry.resolve(&state_on(ViewId::News));
        let home = registry.resolve(&state_on(ViewId::Home));

        assert!(!registry.contains(ViewId::News));
        assert_eq!(fallback, home);
    }

    #[test]
    fn test_unknown_key_matches_home() {
        let registry = full_registry();
        let home = registry.resolve(&state_on(ViewId::Home));

        for key in ["", "cart", "settings", "HOME!"] {
            assert_eq!(registry.resolve_key(key), home);
        }
        assert_eq!(registry.resolve_key("tasks").id, ViewId::Tasks);
    }

    #[test]
    fn test_destinations_in_panel_order() {
        let labels: Vec<&str> = full_registry().destinations().iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Home", "Products", "News", "Tasks"]);
    }

    #[test]
    fn test_with_replaces_entry() {
        let registry = full_registry().with(ViewEntry {
            id: ViewId::News,
            label: "Headlines",
            icon: "🗞️",
            render: "headlines-body",
        });

        assert_eq!(registry.destinations().len(), 4);
        assert_eq!(registry.resolve(&state_on(ViewId::News)).label, "Headlines");
        assert_eq!(registry.default_view(), ViewId::Home);
    }
}
