use dioxus::prelude::*;

/// Mount point for the add-to-home-screen prompt. Takes no data and
/// returns none; the prompt attaches itself to `#install-slot`.
#[component]
pub fn InstallSlot() -> Element {
    rsx! {
        div { id: "install-slot", class: "c-install-slot" }
    }
}
