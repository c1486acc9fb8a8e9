use dioxus::prelude::*;

use crate::domain::{NavAction, NavigationState, Transition, ViewStateArena};
use crate::shared::logging::{log_panel_visibility, log_view_selected};

/// Shell-owned state shared with children as read-only values plus `dispatch`
#[derive(Clone, Copy)]
pub struct ShellHandle {
    navigation: Signal<NavigationState>,
    views: Signal<ViewStateArena>,
}

impl ShellHandle {
    /// Current navigation state (subscribes the caller)
    pub fn navigation(&self) -> NavigationState {
        *self.navigation.read()
    }

    pub fn views(&self) -> Signal<ViewStateArena> {
        self.views
    }

    /// Apply a user intent. The navigation change and the release of the
    /// left view's state are written in the same event, so they render
    /// together.
    pub fn dispatch(&self, action: NavAction) -> Transition {
        let mut navigation = self.navigation;
        let mut views = self.views;

        let mut next = *navigation.peek();
        let transition = next.apply(action);
        if !transition.changed() {
            return transition;
        }
        navigation.set(next);

        if transition.view_changed() {
            log_view_selected(transition.previous.active_view(), transition.current.active_view());
            if views.peek().is_allocated(transition.previous.active_view()) {
                views.write().follow(&transition);
            }
        }
        if transition.panel_changed() {
            log_panel_visibility(transition.current.panel_open());
        }

        transition
    }
}

/// Create the shell state and provide it to descendants
pub fn use_shell() -> ShellHandle {
    let navigation = use_signal(NavigationState::new);
    let views = use_signal(ViewStateArena::new);

    use_context_provider(|| ShellHandle { navigation, views })
}
