//! Application shell: owns navigation and connectivity state and lays out
//! header, panel, active view and footer.

use dioxus::document;
use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::app::components::InstallSlot;
use crate::app::layouts::{Footer, Header, Panel};
use crate::app::pages::{HomeView, NewsView, ProductsView, TasksView};
use crate::config;
use crate::domain::models::ViewId;
use crate::domain::{NavAction, ViewEntry, ViewRegistry};
use crate::shared::hooks::{use_connectivity, use_shell, ConnectivityHandle};

pub type ViewRenderer = fn() -> Element;

fn render_home() -> Element {
    rsx! { HomeView {} }
}

fn render_products() -> Element {
    rsx! { ProductsView {} }
}

fn render_news() -> Element {
    rsx! { NewsView {} }
}

fn render_tasks() -> Element {
    rsx! { TasksView {} }
}

/// Every navigable view; Home is the fallback
pub static VIEW_REGISTRY: Lazy<ViewRegistry<ViewRenderer>> = Lazy::new(|| {
    ViewRegistry::new(ViewEntry::new(ViewId::Home, render_home as ViewRenderer))
        .with(ViewEntry::new(ViewId::Products, render_products as ViewRenderer))
        .with(ViewEntry::new(ViewId::News, render_news as ViewRenderer))
        .with(ViewEntry::new(ViewId::Tasks, render_tasks as ViewRenderer))
});

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("PWA Shop shell initialized");
    });

    use_context_provider(ConnectivityHandle::platform);

    rsx! {
        Shell {}
    }
}

#[component]
fn Shell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let shell = use_shell();
    let online = use_connectivity();

    let navigation = shell.navigation();
    let view = VIEW_REGISTRY.resolve(&navigation);
    let title = config::current().title.clone();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Header {
                title,
                online: online(),
                on_menu: move |_| {
                    shell.dispatch(NavAction::MenuButton);
                },
            }

            Panel {
                open: navigation.panel_open(),
                active: navigation.active_view(),
                destinations: VIEW_REGISTRY.destinations(),
                on_action: move |action| {
                    shell.dispatch(action);
                },
            }

            main { class: "c-layout__main",
                {(view.render)()}
            }

            Footer {}
            InstallSlot {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_is_registered() {
        for view in ViewId::ALL {
            assert!(VIEW_REGISTRY.contains(view), "{} missing", view);
        }
        assert_eq!(VIEW_REGISTRY.default_view(), ViewId::Home);
    }

    #[test]
    fn test_panel_lists_four_destinations() {
        let labels: Vec<&str> = VIEW_REGISTRY.destinations().iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Home", "Products", "News", "Tasks"]);
    }
}
