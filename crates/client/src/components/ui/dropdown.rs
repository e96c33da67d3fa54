//! Minimal click-to-open dropdown menu.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DropdownMenuProps {
    /// Content of the always-visible trigger.
    pub trigger: Element,
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn DropdownMenu(props: DropdownMenuProps) -> Element {
    let mut open = use_signal(|| false);
    let menu_class = props.class.unwrap_or_default();

    rsx! {
        div { class: "relative inline-block",
            span {
                class: "cursor-pointer select-none",
                onclick: move |_| open.set(!open()),
                {props.trigger}
            }
            if open() {
                // Click-away backdrop
                div {
                    class: "fixed inset-0 z-10",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "absolute right-0 z-20 mt-1 rounded-md border border-zinc-200 bg-white py-1 shadow-lg {menu_class}",
                    onclick: move |_| open.set(false),
                    {props.children}
                }
            }
        }
    }
}

#[component]
pub fn DropdownMenuItem(
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "px-3 py-1.5 text-sm text-zinc-700 hover:bg-zinc-100 cursor-pointer",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
