use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{ConnectivityEvent, ConnectivitySource, Listener, Subscription};

/// Browser connectivity: `navigator.onLine` plus the `window`
/// `online`/`offline` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConnectivity;

impl BrowserConnectivity {
    pub fn new() -> Self {
        Self
    }
}

impl ConnectivitySource for BrowserConnectivity {
    fn current(&self) -> Option<bool> {
        web_sys::window().map(|window| window.navigator().on_line())
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window available, connectivity events will not be observed");
            return Subscription::noop();
        };

        let mut registered: Vec<(ConnectivityEvent, Closure<dyn FnMut(web_sys::Event)>)> =
            Vec::with_capacity(ConnectivityEvent::ALL.len());

        for event in ConnectivityEvent::ALL {
            let listener = listener.clone();
            let online = event.is_online();
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                listener(online);
            }) as Box<dyn FnMut(web_sys::Event)>);

            match window.add_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref()) {
                Ok(()) => registered.push((event, callback)),
                Err(e) => {
                    tracing::error!(event = event.as_str(), "Failed to add connectivity listener: {:?}", e);
                }
            }
        }

        // Both listeners go away together; the closures are freed only after
        // the browser no longer references them.
        Subscription::new(move || {
            for (event, callback) in registered {
                if let Err(e) =
                    window.remove_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref())
                {
                    tracing::warn!(event = event.as_str(), "Failed to remove connectivity listener: {:?}", e);
                }
            }
        })
    }
}
