use dioxus::prelude::*;

use crate::components::ui::{AvatarSize, UserAvatar};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "M3 9l9-7 9 7v11a2 2 0 01-2 2H5a2 2 0 01-2-2z"),
    ("My Network", "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8z"),
    ("Jobs", "M20 7H4a2 2 0 00-2 2v10a2 2 0 002 2h16a2 2 0 002-2V9a2 2 0 00-2-2zM16 21V5a2 2 0 00-2-2h-4a2 2 0 00-2 2v16"),
    ("Messaging", "M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z"),
    ("Notifications", "M18 8A6 6 0 006 8c0 7-3 9-3 9h18s-3-2-3-9M13.73 21a2 2 0 01-3.46 0"),
];

/// Top navigation bar. Only "Home" is real.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "sticky top-0 z-30 bg-white border-b border-zinc-200",
            div { class: "max-w-6xl mx-auto flex items-center justify-between px-4 h-14",
                div { class: "flex items-center gap-2",
                    div { class: "w-9 h-9 rounded bg-blue-700 text-white font-bold text-xl flex items-center justify-center",
                        "in"
                    }
                    input {
                        class: "hidden md:block w-64 rounded bg-slate-100 px-3 py-1.5 text-sm focus:outline-none",
                        placeholder: "Search",
                    }
                }
                nav { class: "flex items-center gap-1 sm:gap-4",
                    for (i, (label, icon)) in NAV_ITEMS.into_iter().enumerate() {
                        div {
                            key: "{label}",
                            class: nav_item_class(i == 0),
                            svg {
                                class: "w-6 h-6",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: icon,
                                }
                            }
                            span { class: "hidden lg:block text-xs", "{label}" }
                        }
                    }
                    div { class: "flex flex-col items-center px-2 text-zinc-500",
                        UserAvatar { name: "Me", size: AvatarSize::Small }
                        span { class: "hidden lg:block text-xs", "Me" }
                    }
                }
            }
        }
    }
}

fn nav_item_class(active: bool) -> &'static str {
    if active {
        "flex flex-col items-center px-2 text-zinc-900 border-b-2 border-zinc-900 cursor-pointer"
    } else {
        "flex flex-col items-center px-2 text-zinc-500 hover:text-zinc-900 cursor-pointer"
    }
}
