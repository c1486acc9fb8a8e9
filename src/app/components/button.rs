use dioxus::prelude::*;

/// Compact icon-only button; `label` is the accessible name
#[component]
pub fn IconButton(
    label: &'static str,
    #[props(default = "")]
    class: &'static str,
    on_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let btn_class = if class.is_empty() {
        "c-icon-button".to_string()
    } else {
        format!("c-icon-button {}", class)
    };

    rsx! {
        button {
            class: "{btn_class}",
            r#type: "button",
            aria_label: label,
            title: label,
            onclick: move |evt| on_click.call(evt),
            {children}
        }
    }
}
