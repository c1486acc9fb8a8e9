use dioxus::prelude::*;

use crate::app::components::Card;
use crate::domain::models::PRODUCTS;

#[component]
pub fn ProductsView() -> Element {
    rsx! {
        section { class: "c-view c-view--products",
            h2 { class: "c-view__title", "Products" }
            div { class: "c-grid c-grid--3",
                for product in PRODUCTS {
                    Card {
                        key: "{product.id}",
                        title: product.name.to_string(),
                        div { class: "c-product__image", "🛒" }
                        p { class: "c-product__category", "{product.category}" }
                        p { class: "c-product__price", "{product.display_price()}" }
                    }
                }
            }
        }
    }
}
