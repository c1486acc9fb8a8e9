use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::config;

pub fn copyright_line(year: i32) -> String {
    format!("© {} All rights reserved", year)
}

#[component]
pub fn Footer() -> Element {
    let config = config::current();
    let copyright = copyright_line(Utc::now().year());

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__brand",
                p { class: "c-footer__title", "{config.title}" }
                p { class: "c-footer__tagline", "{config.tagline}" }
            }
            div { class: "c-footer__legal",
                p { class: "c-footer__copyright", "{copyright}" }
                p { class: "c-footer__note", "{config.footer_note}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 All rights reserved");
    }
}
