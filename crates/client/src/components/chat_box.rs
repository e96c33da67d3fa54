//! Docked "Messaging" box. Messages go nowhere; the recruiter always replies.

use dioxus::prelude::*;

use crate::components::ui::{AvatarSize, Button, UserAvatar};

const CANNED_REPLY: &str = "Thanks for reaching out! Are you open to an unpaid opportunity?";

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_me: bool,
    text: String,
}

#[component]
pub fn ChatBox() -> Element {
    let mut open = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut lines = use_signal(|| {
        vec![ChatLine {
            from_me: false,
            text: "Hi! I came across your profile and was impressed by your scrolling.".to_string(),
        }]
    });

    let mut send = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        let mut history = lines.write();
        history.push(ChatLine { from_me: true, text });
        history.push(ChatLine {
            from_me: false,
            text: CANNED_REPLY.to_string(),
        });
        draft.set(String::new());
    };

    let history = lines.read().clone();

    rsx! {
        div { class: "fixed bottom-0 right-4 z-40 w-72 rounded-t-lg border border-zinc-300 bg-white shadow-xl",
            div {
                class: "flex items-center gap-2 px-3 py-2 cursor-pointer border-b border-zinc-200",
                onclick: move |_| open.set(!open()),
                UserAvatar { name: "Me", size: AvatarSize::Small }
                span { class: "flex-1 text-sm font-semibold", "Messaging" }
                span { class: "text-zinc-500 text-xs", if open() { "▾" } else { "▴" } }
            }
            if open() {
                div { class: "h-64 overflow-y-auto p-3 space-y-2",
                    for (i, line) in history.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: bubble_class(line.from_me),
                            "{line.text}"
                        }
                    }
                }
                div { class: "flex items-center gap-2 border-t border-zinc-200 p-2",
                    input {
                        class: "flex-1 rounded bg-slate-100 px-2 py-1 text-sm focus:outline-none",
                        placeholder: "Write a message...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    Button {
                        disabled: draft.read().trim().is_empty(),
                        onclick: move |_| send(),
                        "Send"
                    }
                }
            }
        }
    }
}

fn bubble_class(from_me: bool) -> &'static str {
    if from_me {
        "ml-8 rounded-lg bg-blue-600 text-white px-3 py-2 text-sm"
    } else {
        "mr-8 rounded-lg bg-slate-100 px-3 py-2 text-sm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_messages_sit_on_the_right() {
        assert!(bubble_class(true).starts_with("ml-8"));
        assert!(bubble_class(false).starts_with("mr-8"));
    }
}
