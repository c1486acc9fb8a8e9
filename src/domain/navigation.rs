//! Navigation state of the shell: active view and slide-in panel visibility.

use crate::domain::models::ViewId;

/// User intents that mutate [`NavigationState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Header menu button. Opens the panel.
    MenuButton,
    /// Destination picked in the panel. Selects the view and closes the panel.
    Select(ViewId),
    /// Explicit close control inside the panel
    ClosePanel,
    /// Tap on the backdrop behind the open panel
    DismissOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    active_view: ViewId,
    panel_open: bool,
}

/// Before/after pair produced by every mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: NavigationState,
    pub current: NavigationState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    pub fn view_changed(&self) -> bool {
        self.previous.active_view != self.current.active_view
    }

    pub fn panel_changed(&self) -> bool {
        self.previous.panel_open != self.current.panel_open
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active_view: ViewId::DEFAULT,
            panel_open: false,
        }
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Select `view` and close the panel in one step. Closes the panel even
    /// when `view` is already active.
    pub fn select_and_close(&mut self, view: ViewId) -> Transition {
        self.mutate(|state| {
            state.active_view = view;
            state.panel_open = false;
        })
    }

    pub fn open_panel(&mut self) -> Transition {
        self.set_panel_open(true)
    }

    pub fn close_panel(&mut self) -> Transition {
        self.set_panel_open(false)
    }

    pub fn set_panel_open(&mut self, open: bool) -> Transition {
        self.mutate(|state| state.panel_open = open)
    }

    pub fn apply(&mut self, action: NavAction) -> Transition {
        match action {
            NavAction::MenuButton => self.open_panel(),
            NavAction::Select(view) => self.select_and_close(view),
            NavAction::ClosePanel | NavAction::DismissOverlay => self.close_panel(),
        }
    }

    fn mutate(&mut self, f: impl FnOnce(&mut Self)) -> Transition {
        let previous = *self;
        f(self);
        Transition {
            previous,
            current: *self,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.active_view(), ViewId::Home);
        assert!(!state.panel_open());
    }

    #[test]
    fn test_select_always_closes_panel() {
        for prior_view in ViewId::ALL {
            for prior_open in [false, true] {
                for target in ViewId::ALL {
                    let mut state = NavigationState::new();
                    state.select_and_close(prior_view);
                    state.set_panel_open(prior_open);

                    state.select_and_close(target);

                    assert_eq!(state.active_view(), target);
                    assert!(!state.panel_open());
                }
            }
        }
    }

    #[test]
    fn test_select_sequence() {
        let mut state = NavigationState::new();
        for target in [ViewId::News, ViewId::Tasks, ViewId::Tasks, ViewId::Home, ViewId::Products] {
            state.open_panel();
            state.select_and_close(target);
            assert_eq!(state.active_view(), target);
            assert!(!state.panel_open());
        }
    }

    #[test]
    fn test_reselecting_active_view_still_closes_panel() {
        let mut state = NavigationState::new();
        state.open_panel();

        let transition = state.select_and_close(ViewId::Home);

        assert!(!transition.view_changed());
        assert!(transition.panel_changed());
        assert!(!state.panel_open());
    }

    #[test]
    fn test_panel_select_is_single_update() {
        let mut state = NavigationState::new();
        state.apply(NavAction::MenuButton);

        let transition = state.apply(NavAction::Select(ViewId::Products));

        assert_eq!(transition.previous.active_view(), ViewId::Home);
        assert!(transition.previous.panel_open());
        assert_eq!(transition.current.active_view(), ViewId::Products);
        assert!(!transition.current.panel_open());
    }

    #[test]
    fn test_open_panel_is_idempotent() {
        let mut once = NavigationState::new();
        once.open_panel();

        let mut twice = NavigationState::new();
        twice.open_panel();
        let second = twice.open_panel();

        assert_eq!(once, twice);
        assert!(!second.changed());
    }

    #[test]
    fn test_dismissal_paths_are_idempotent() {
        let mut state = NavigationState::new();
        assert!(!state.apply(NavAction::ClosePanel).changed());
        assert!(!state.apply(NavAction::DismissOverlay).changed());

        state.apply(NavAction::MenuButton);
        assert!(state.apply(NavAction::DismissOverlay).changed());
        assert!(!state.panel_open());

        state.apply(NavAction::MenuButton);
        assert!(state.apply(NavAction::ClosePanel).changed());
        assert!(!state.panel_open());
        assert_eq!(state.active_view(), ViewId::Home);
    }
}
