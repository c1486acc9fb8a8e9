use dioxus::prelude::*;

use crate::app::components::Card;
use crate::config;
use crate::domain::models::FEATURES;

#[component]
pub fn HomeView() -> Element {
    let title = &config::current().title;

    rsx! {
        section { class: "c-view c-view--home",
            h2 { class: "c-view__title", "Welcome to {title}" }
            div { class: "c-grid c-grid--3",
                for feature in FEATURES {
                    Card {
                        key: "{feature.title}",
                        title: feature.title.to_string(),
                        accent: feature.accent.to_string(),
                        p { class: "c-card__text", "{feature.description}" }
                    }
                }
            }
        }
    }
}
