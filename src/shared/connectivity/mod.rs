//! Connectivity sensor: mirrors the platform's online/offline signal.
//!
//! The platform signal is reached through [`ConnectivitySource`] so the shell
//! can run against the browser, a native stand-in or a fake in tests. A
//! [`ConnectivitySensor`] reads the current value synchronously, subscribes to
//! both events and keeps a cached mirror until it is detached or dropped.

pub mod manual;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use manual::ManualConnectivity;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserConnectivity;

use std::cell::Cell;
use std::rc::Rc;

use crate::shared::logging::{log_connectivity_change, log_subscription};

/// Value assumed when the platform cannot report connectivity
pub const ONLINE_WHEN_UNKNOWN: bool = true;

/// Callback receiving the new connectivity value
pub type Listener = Rc<dyn Fn(bool)>;

/// The two platform events the sensor listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

impl ConnectivityEvent {
    pub const ALL: [ConnectivityEvent; 2] = [ConnectivityEvent::Online, ConnectivityEvent::Offline];

    /// Platform event name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityEvent::Online => "online",
            ConnectivityEvent::Offline => "offline",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ConnectivityEvent::Online)
    }
}

/// Injectable platform connectivity signal
pub trait ConnectivitySource {
    /// Current platform value, `None` when the platform cannot tell
    fn current(&self) -> Option<bool>;

    /// Register `listener` for both events. Dropping the returned guard
    /// unregisters both.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Guard over a registered listener pair; releases exactly once
#[must_use = "dropping a Subscription unregisters its listeners"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unregister now. Later calls and the final drop do nothing.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Initial value for a source, failing open when it is unavailable
pub fn initial_connectivity(source: &dyn ConnectivitySource) -> bool {
    source.current().unwrap_or(ONLINE_WHEN_UNKNOWN)
}

/// Passive mirror of a [`ConnectivitySource`]
pub struct ConnectivitySensor {
    online: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl ConnectivitySensor {
    /// Read the current value and subscribe. `on_change` runs after the
    /// mirror has been updated for every delivered event.
    pub fn attach(source: &dyn ConnectivitySource, on_change: impl Fn(bool) + 'static) -> Self {
        let online = Rc::new(Cell::new(initial_connectivity(source)));

        let mirror = Rc::clone(&online);
        let subscription = source.subscribe(Rc::new(move |value| {
            mirror.set(value);
            log_connectivity_change(value);
            on_change(value);
        }));
        log_subscription(true, online.get());

        Self { online, subscription }
    }

    pub fn is_online(&self) -> bool {
        self.online.get()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the subscription. Returns `false` when already detached.
    pub fn detach(&mut self) -> bool {
        if !self.subscription.is_active() {
            return false;
        }
        self.subscription.cancel();
        log_subscription(false, self.online.get());
        true
    }
}

impl Drop for ConnectivitySensor {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Connectivity source for the current compilation target
#[cfg(target_arch = "wasm32")]
pub fn platform_connectivity() -> Rc<dyn ConnectivitySource> {
    Rc::new(BrowserConnectivity::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_connectivity() -> Rc<dyn ConnectivitySource> {
    // No platform signal on native: the sensor fails open
    Rc::new(ManualConnectivity::unavailable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_sensor(source: &ManualConnectivity) -> (ConnectivitySensor, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sensor = ConnectivitySensor::attach(source, move |value| sink.borrow_mut().push(value));
        (sensor, seen)
    }

    #[test]
    fn test_initial_value_read_synchronously() {
        let offline = ManualConnectivity::new(false);
        let (sensor, seen) = recording_sensor(&offline);
        assert!(!sensor.is_online());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_fails_open_when_signal_unavailable() {
        let source = ManualConnectivity::unavailable();
        let (sensor, _) = recording_sensor(&source);
        assert!(sensor.is_online());
    }

    #[test]
    fn test_offline_then_online() {
        let source = ManualConnectivity::new(true);
        let (sensor, seen) = recording_sensor(&source);

        source.emit(ConnectivityEvent::Offline);
        assert!(!sensor.is_online());
        source.emit(ConnectivityEvent::Online);
        assert!(sensor.is_online());

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak_listeners() {
        let source = ManualConnectivity::new(true);

        for _ in 0..5 {
            let (sensor, seen) = recording_sensor(&source);
            assert_eq!(source.listener_count(), 1);
            source.emit(ConnectivityEvent::Offline);
            source.emit(ConnectivityEvent::Online);
            assert_eq!(*seen.borrow(), vec![false, true]);
            drop(sensor);
            assert_eq!(source.listener_count(), 0);
        }
    }

    #[test]
    fn test_detach_is_idempotent() {
        let source = ManualConnectivity::new(true);
        let (mut sensor, seen) = recording_sensor(&source);

        assert!(sensor.detach());
        assert!(!sensor.detach());
        assert!(!sensor.is_attached());

        source.emit(ConnectivityEvent::Offline);
        assert!(seen.borrow().is_empty());
        assert!(sensor.is_online());
        drop(sensor);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_teardown_during_dispatch() {
        let source = ManualConnectivity::new(true);
        let slot: Rc<RefCell<Option<ConnectivitySensor>>> = Rc::new(RefCell::new(None));

        let holder = Rc::clone(&slot);
        let sensor = ConnectivitySensor::attach(&source, move |_| {
            holder.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sensor);

        let (_other, seen) = recording_sensor(&source);
        assert_eq!(source.listener_count(), 2);

        source.emit(ConnectivityEvent::Offline);

        assert!(slot.borrow().is_none());
        assert_eq!(source.listener_count(), 1);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_subscription_cancel_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.cancel();
        subscription.cancel();
        drop(subscription);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ConnectivityEvent::Online.as_str(), "online");
        assert_eq!(ConnectivityEvent::Offline.as_str(), "offline");
        assert!(ConnectivityEvent::Online.is_online());
        assert!(!ConnectivityEvent::Offline.is_online());
    }
}
