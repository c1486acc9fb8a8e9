use dioxus::prelude::*;

pub fn connectivity_label(online: bool) -> &'static str {
    if online { "Online" } else { "Offline" }
}

pub fn connectivity_icon(online: bool) -> &'static str {
    if online { "📶" } else { "🚫" }
}

/// Header indicator for the mirrored connectivity state
#[component]
pub fn ConnectivityBadge(online: bool) -> Element {
    let badge_class = if online {
        "c-connectivity c-connectivity--online"
    } else {
        "c-connectivity c-connectivity--offline"
    };

    rsx! {
        div {
            class: "{badge_class}",
            role: "status",
            aria_live: "polite",
            span { class: "c-connectivity__icon", "{connectivity_icon(online)}" }
            span { class: "c-connectivity__text", "{connectivity_label(online)}" }
        }
    }
}
