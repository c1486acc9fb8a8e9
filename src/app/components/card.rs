use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    /// Colour modifier for the left border, e.g. "blue"
    accent: Option<String>,
    children: Element,
) -> Element {
    let accent_class = accent
        .map(|accent| format!("c-card--{}", accent))
        .unwrap_or_default();

    rsx! {
        div {
            class: "c-card {accent_class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
