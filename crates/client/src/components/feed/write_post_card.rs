use dioxus::prelude::*;

use crate::components::ui::{AvatarSize, Button, ButtonVariant, Card, UserAvatar};

const COMPOSER_SHORTCUTS: [(&str, &str); 3] = [
    ("Media", "text-sky-600"),
    ("Event", "text-amber-600"),
    ("Write article", "text-orange-700"),
];

/// "Start a post" composer. Typing works; nothing is ever published.
#[component]
pub fn WriteNewPostCard() -> Element {
    let mut draft = use_signal(String::new);
    let mut posted = use_signal(|| false);

    rsx! {
        Card { class: "p-4",
            div { class: "flex flex-row items-center gap-3",
                UserAvatar { name: "Me", size: AvatarSize::Medium }
                input {
                    class: "flex-1 rounded-full border border-zinc-400 px-4 py-3 text-sm font-semibold text-zinc-600 hover:bg-zinc-100 focus:outline-none",
                    placeholder: "Start a post",
                    value: "{draft}",
                    oninput: move |evt| {
                        posted.set(false);
                        draft.set(evt.value());
                    },
                }
            }
            if posted() {
                p { class: "mt-2 text-xs text-zinc-500",
                    "Your post is being reviewed by our thought leadership committee."
                }
            }
            div { class: "flex flex-row justify-between items-center mt-2",
                for (label, color) in COMPOSER_SHORTCUTS {
                    div {
                        key: "{label}",
                        class: "p-2 rounded hover:bg-zinc-100 text-sm font-semibold text-zinc-500 cursor-pointer",
                        span { class: "{color} mr-1", "■" }
                        "{label}"
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: draft.read().trim().is_empty(),
                    onclick: move |_| {
                        draft.set(String::new());
                        posted.set(true);
                    },
                    "Post"
                }
            }
        }
    }
}
