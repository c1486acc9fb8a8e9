use dioxus::prelude::*;
use std::marker::PhantomData;

use crate::domain::models::ViewId;
use crate::domain::ViewStateArena;
use crate::shared::hooks::ShellHandle;

/// Typed access to one view's slot in the shell's state arena
pub struct ViewSlot<T: 'static> {
    view: ViewId,
    views: Signal<ViewStateArena>,
    _state: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for ViewSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ViewSlot<T> {}

impl<T: 'static> ViewSlot<T> {
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Snapshot of the slot, `None` once the shell released it
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.views.read().get::<T>(self.view).cloned()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut views = self.views;
        let mut arena = views.write();
        arena.get_mut::<T>(self.view).map(f)
    }
}

/// Allocate the calling view's private state on first mount
pub fn use_view_slot<T: 'static>(view: ViewId, init: fn() -> T) -> ViewSlot<T> {
    let shell = use_context::<ShellHandle>();
    let mut views = shell.views();

    use_hook(move || {
        views.write().get_or_insert_with(view, init);
    });

    ViewSlot {
        view,
        views,
        _state: PhantomData,
    }
}
