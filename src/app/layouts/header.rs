use dioxus::prelude::*;

use crate::app::components::{ConnectivityBadge, IconButton};

/// Fixed top bar: menu button, title and connectivity indicator
#[component]
pub fn Header(title: String, online: bool, on_menu: EventHandler<()>) -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-header__brand",
                IconButton {
                    class: "c-header__menu",
                    label: "Toggle menu",
                    on_click: move |_| on_menu.call(()),
                    "☰"
                }
                h1 { class: "c-header__title", "{title}" }
            }

            ConnectivityBadge { online }
        }
    }
}
