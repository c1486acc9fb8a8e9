use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::shared::connectivity::{
    initial_connectivity, platform_connectivity, ConnectivitySensor, ConnectivitySource,
};

/// Connectivity source provided through context, replaceable in tests
#[derive(Clone)]
pub struct ConnectivityHandle(Rc<dyn ConnectivitySource>);

impl ConnectivityHandle {
    pub fn new(source: Rc<dyn ConnectivitySource>) -> Self {
        Self(source)
    }

    pub fn platform() -> Self {
        Self(platform_connectivity())
    }

    pub fn source(&self) -> &dyn ConnectivitySource {
        self.0.as_ref()
    }
}

/// Mirror the provided connectivity source into a signal.
///
/// Subscribes on mount and releases both listeners when the calling
/// component unmounts.
pub fn use_connectivity() -> Signal<bool> {
    let handle = use_context::<ConnectivityHandle>();
    let online = use_signal(|| initial_connectivity(handle.source()));

    let sensor = use_hook(move || {
        let sensor = ConnectivitySensor::attach(handle.source(), move |value| {
            let mut online = online;
            online.set(value);
        });
        Rc::new(RefCell::new(sensor))
    });

    use_drop(move || {
        sensor.borrow_mut().detach();
    });

    online
}
