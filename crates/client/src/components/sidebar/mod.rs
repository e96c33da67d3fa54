//! Left column: profile card, scroll counter and shortcuts.

pub mod profile;

use dioxus::prelude::*;

use crate::components::ui::Card;
pub use profile::{PremiumPromo, ProfileHeader, ProfileStats, StatusCounter};

const SIDEBAR_ITEMS: [(&str, &str); 4] = [
    ("Saved items", "M19 21l-7-5-7 5V5a2 2 0 012-2h10a2 2 0 012 2z"),
    ("Groups", "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75"),
    ("Newsletters", "M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8"),
    ("Events", "M19 4H5a2 2 0 00-2 2v14a2 2 0 002 2h14a2 2 0 002-2V6a2 2 0 00-2-2zM16 2v4M8 2v4M3 10h18"),
];

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        div { style: "grid-area: sidebar",
            div { class: "hidden sm:block sticky top-4 self-start space-y-2",
                Card { class: "overflow-hidden",
                    ProfileHeader {}
                    ProfileStats {}
                    PremiumPromo {}
                }
                StatusCounter {}
                Card { class: "overflow-hidden",
                    SidebarItems {}
                }
            }

            div { class: "block sm:hidden",
                MobileSidebar {}
            }
        }
    }
}

#[component]
fn SidebarItems() -> Element {
    rsx! {
        div { class: "border-t border-gray-200",
            for (label, icon) in SIDEBAR_ITEMS {
                div {
                    key: "{label}",
                    class: "flex items-center p-3 text-sm font-medium hover:bg-gray-100 cursor-pointer",
                    svg {
                        class: "w-5 h-5 mr-3",
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
                    span { "{label}" }
                }
            }
        }
    }
}

/// Collapsed profile card for narrow screens.
#[component]
fn MobileSidebar() -> Element {
    let mut expanded = use_signal(|| false);
    let chevron = if expanded() { "M18 15l-6-6-6 6" } else { "M6 9l6 6 6-6" };

    rsx! {
        div { class: "space-y-2",
            Card { class: "overflow-hidden",
                ProfileHeader {}
                if expanded() {
                    ProfileStats {}
                    PremiumPromo {}
                    StatusCounter {}
                }
                div {
                    class: "p-3 text-center text-gray-600 font-medium border-t border-gray-200 hover:bg-gray-100 cursor-pointer",
                    onclick: move |_| expanded.set(!expanded()),
                    div { class: "flex items-center justify-center",
                        if expanded() { "Show less" } else { "Show more" }
                        svg {
                            class: "w-4 h-4 ml-1",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: chevron,
                            }
                        }
                    }
                }
            }
            if expanded() {
                Card { class: "overflow-hidden",
                    SidebarItems {}
                }
            }
        }
    }
}
