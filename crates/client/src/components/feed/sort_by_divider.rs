use dioxus::prelude::*;

use crate::components::ui::{DropdownMenu, DropdownMenuItem, Separator};

/// "Sort by: Top" rule above the feed. Purely decorative; the order never changes.
#[component]
pub fn SortByDivider() -> Element {
    rsx! {
        div { class: "flex flex-row mt-2",
            div { class: "pt-2 w-full",
                Separator { class: "bg-zinc-300" }
            }
            span { class: "text-zinc-500 text-xs w-24 pl-2 shrink-0",
                DropdownMenu {
                    class: "w-24",
                    trigger: rsx! {
                        "Sort by: "
                        span { class: "font-semibold text-zinc-800", "Top" }
                    },
                    DropdownMenuItem { span { "Top" } }
                    DropdownMenuItem { span { "Recent" } }
                }
            }
        }
    }
}
