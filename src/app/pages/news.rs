use dioxus::prelude::*;

use crate::domain::models::NEWS;

#[component]
pub fn NewsView() -> Element {
    rsx! {
        section { class: "c-view c-view--news",
            h2 { class: "c-view__title", "News" }
            div { class: "c-news",
                for item in NEWS {
                    article { key: "{item.id}", class: "c-card c-news__item",
                        h3 { class: "c-news__title", "{item.title}" }
                        time { class: "c-news__date", datetime: item.date, "{item.display_date()}" }
                        p { class: "c-news__excerpt", "{item.excerpt}" }
                    }
                }
            }
        }
    }
}
