//! Per-view ephemeral state slots.
//!
//! The shell keeps one opaque slot per [`ViewId`]. A view allocates its slot
//! the first time it mounts and the slot is discarded when navigation leaves
//! that view, so remounting starts again from the seed value.

use std::any::Any;

use crate::domain::models::ViewId;
use crate::domain::navigation::Transition;
use crate::shared::logging::log_view_state;

#[derive(Default)]
pub struct ViewStateArena {
    slots: [Option<Box<dyn Any>>; ViewId::COUNT],
}

impl ViewStateArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the state held for `view`, allocating it with `init` when the
    /// slot is empty or holds a value of another type.
    pub fn get_or_insert_with<T: 'static>(&mut self, view: ViewId, init: impl FnOnce() -> T) -> &mut T {
        let slot = &mut self.slots[view.index()];
        if !slot.as_ref().is_some_and(|state| state.is::<T>()) {
            *slot = Some(Box::new(init()));
            log_view_state(view, true);
        }
        match slot.as_mut().and_then(|state| state.downcast_mut::<T>()) {
            Some(state) => state,
            None => unreachable!("slot was just filled with this type"),
        }
    }

    pub fn get<T: 'static>(&self, view: ViewId) -> Option<&T> {
        self.slots[view.index()].as_ref()?.downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static>(&mut self, view: ViewId) -> Option<&mut T> {
        self.slots[view.index()].as_mut()?.downcast_mut::<T>()
    }

    pub fn is_allocated(&self, view: ViewId) -> bool {
        self.slots[view.index()].is_some()
    }

    pub fn allocated_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Discard the state of `view`. Returns whether anything was held.
    pub fn release(&mut self, view: ViewId) -> bool {
        let released = self.slots[view.index()].take().is_some();
        if released {
            log_view_state(view, false);
        }
        released
    }

    /// Drop the state of the view a navigation transition just left
    pub fn follow(&mut self, transition: &Transition) -> Option<ViewId> {
        if !transition.view_changed() {
            return None;
        }
        let left = transition.previous.active_view();
        self.release(left).then_some(left)
    }
}
