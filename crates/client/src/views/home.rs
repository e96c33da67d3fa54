use dioxus::prelude::*;

use crate::components::{Aside, ChatBox, Feed, Header, Sidebar};

/// The whole page: header, three-column grid and the docked chat box.
#[component]
pub fn Home() -> Element {
    rsx! {
        Header {}
        div { id: "index-grid", class: "pt-4 grid gap-6",
            Sidebar {}
            Feed {}
            Aside {}
        }
        ChatBox {}
    }
}
