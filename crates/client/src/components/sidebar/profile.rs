//! Profile card pieces whose text reacts to the session scroll count.

use dioxus::prelude::*;

use crate::components::ui::{AvatarSize, Card, UserAvatar};
use crate::stores::scrolled_posts;

#[component]
pub fn ProfileHeader() -> Element {
    rsx! {
        div { class: "relative",
            div { class: "bg-slate-300 h-16 w-full rounded-t-lg" }
            div { class: "px-4 pb-4",
                div { class: "relative",
                    UserAvatar {
                        name: "Me",
                        size: AvatarSize::Large,
                        class: "absolute -top-12 left-0",
                    }
                }
                div { class: "pt-14", ProfileInfo {} }
            }
        }
    }
}

#[component]
fn ProfileInfo() -> Element {
    let title = scrolled_posts().title();

    rsx! {
        div {
            h2 { class: "text-xl font-bold", "Me" }
            p { class: "text-sm text-gray-600 mt-1", "{title}" }
        }
    }
}

#[component]
pub fn ProfileStats() -> Element {
    let viewers = scrolled_posts().profile_viewers();

    rsx! {
        div { class: "border-t border-gray-200 pt-3 pb-1 px-4",
            div { class: "flex justify-between items-center mb-2",
                p { class: "text-sm font-medium", "Profile viewers" }
                span { class: "text-blue-600 font-medium", "{viewers}" }
            }
            div { class: "text-sm text-blue-600 font-medium cursor-pointer hover:underline",
                "View all analytics"
            }
        }
    }
}

#[component]
pub fn PremiumPromo() -> Element {
    rsx! {
        div { class: "border-t border-gray-200 pt-3 px-4 pb-4",
            p { class: "text-sm text-gray-600 mb-2", "Subscribe to Premium or we will eat your soul" }
            div { class: "flex items-center",
                div { class: "w-5 h-5 bg-amber-500 mr-2" }
                p { class: "text-sm font-medium", "Retry Premium for $1000" }
            }
        }
    }
}

#[component]
pub fn StatusCounter() -> Element {
    let scrolled = scrolled_posts().get();

    rsx! {
        Card { class: "mt-2 p-4",
            p { class: "text-sm", "Posts scrolled this session" }
            p { class: "text-2xl font-bold text-blue-600 mt-1", "{scrolled}" }
            div { class: "mt-2 text-xs text-gray-500",
                "Scroll through more posts to take your career to new heights!"
            }
        }
    }
}
