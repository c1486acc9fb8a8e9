use dioxus::prelude::*;

use crate::app::components::IconButton;
use crate::domain::models::ViewId;
use crate::domain::{Destination, NavAction};

/// Slide-in navigation panel with its backdrop.
///
/// Holds no state of its own: visibility comes from `open` and every
/// interaction is reported to the shell as a [`NavAction`].
#[component]
pub fn Panel(
    open: bool,
    active: ViewId,
    destinations: Vec<Destination>,
    on_action: EventHandler<NavAction>,
) -> Element {
    let panel_class = if open { "c-panel c-panel--open" } else { "c-panel" };

    rsx! {
        // Backdrop
        if open {
            div {
                class: "c-panel__backdrop",
                onclick: move |_| on_action.call(NavAction::DismissOverlay),
            }
        }

        aside {
            class: "{panel_class}",
            aria_hidden: if open { "false" } else { "true" },
            div { class: "c-panel__header",
                h2 { class: "c-panel__title", "Menu" }
                IconButton {
                    class: "c-panel__close",
                    label: "Close menu",
                    on_click: move |_| on_action.call(NavAction::ClosePanel),
                    "✕"
                }
            }

            nav { class: "c-panel__nav",
                ul {
                    for destination in destinations {
                        li { key: "{destination.id}",
                            button {
                                class: if destination.id == active { "c-panel__item is-active" } else { "c-panel__item" },
                                onclick: move |_| on_action.call(NavAction::Select(destination.id)),
                                span { class: "c-panel__item-icon", "{destination.icon}" }
                                span { class: "c-panel__item-text", "{destination.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
