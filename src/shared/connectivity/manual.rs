use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{ConnectivityEvent, ConnectivitySource, Listener, Subscription};

#[derive(Default)]
struct Registry {
    current: Option<bool>,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.iter().any(|(registered, _)| *registered == id)
    }
}

/// In-memory connectivity source driven by hand.
///
/// Stands in for the platform on native targets and drives the sensor in
/// tests. Listeners removed while an event is being delivered are skipped.
#[derive(Clone, Default)]
pub struct ManualConnectivity {
    inner: Rc<RefCell<Registry>>,
}

impl ManualConnectivity {
    pub fn new(online: bool) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().current = Some(online);
        source
    }

    /// Source that cannot report a current value
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Deliver a platform event to every registered listener
    pub fn emit(&self, event: ConnectivityEvent) {
        let online = event.is_online();
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            inner.current = Some(online);
            inner.listeners.clone()
        };

        for (id, listener) in snapshot {
            let registered = self.inner.borrow().is_registered(id);
            if registered {
                listener(online);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ConnectivitySource for ManualConnectivity {
    fn current(&self) -> Option<bool> {
        self.inner.borrow().current
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(registered, _)| *registered != id);
            }
        })
    }
}
