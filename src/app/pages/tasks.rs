use dioxus::prelude::*;

use crate::domain::models::{Checklist, ViewId};
use crate::shared::hooks::use_view_slot;

/// Checklist view. Its state lives in the shell's slot for this view and is
/// dropped when navigation moves elsewhere.
#[component]
pub fn TasksView() -> Element {
    let checklist = use_view_slot(ViewId::Tasks, Checklist::seed);
    let list = checklist.get().unwrap_or_default();
    let done = list.completed_count();
    let total = list.len();

    rsx! {
        section { class: "c-view c-view--tasks",
            h2 { class: "c-view__title", "Tasks" }
            p { class: "c-tasks__progress", "{done} of {total} done" }
            div { class: "c-card",
                ul { class: "c-tasks",
                    for item in list.items().iter().cloned() {
                        li { key: "{item.id}", class: "c-tasks__item",
                            input {
                                r#type: "checkbox",
                                class: "c-tasks__checkbox",
                                checked: item.done,
                                onchange: move |_| {
                                    checklist.update(|tasks| tasks.toggle(item.id));
                                },
                            }
                            span {
                                class: if item.done { "c-tasks__label c-tasks__label--done" } else { "c-tasks__label" },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
