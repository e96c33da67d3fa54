//! The main column: composer, sort control and the infinite post list.

use dioxus::prelude::*;
use megalite_shared::{random_permutation, FeedWindow, FEED_SIZE};

use super::{FeedPost, SortByDivider, WriteNewPostCard};
use crate::components::ui::{Button, ButtonVariant};
use crate::hooks::use_infinite_scroll;
use crate::stores::bump_scrolled_posts;

const SENTINEL_ID: &str = "feed-sentinel";

#[component]
pub fn Feed() -> Element {
    // Shuffled once per page load.
    let order = use_hook(|| random_permutation(FEED_SIZE, &mut rand::thread_rng()));
    let mut window = use_signal(FeedWindow::default);

    let mut show_more = move || {
        if window.write().advance() {
            crate::log_debug!("feed: showing {} posts", window.peek().visible());
        }
        bump_scrolled_posts();
    };

    let on_visible = use_callback(move |()| show_more());
    let observing = use_infinite_scroll(SENTINEL_ID, on_visible);

    let visible = window.read().visible_ids(&order).to_vec();
    let exhausted = window.read().is_exhausted();

    rsx! {
        div { style: "grid-area: main", class: "flex flex-col gap-2 pb-20",
            WriteNewPostCard {}
            SortByDivider {}

            for post_id in visible {
                FeedPost { key: "{post_id}", post_id }
            }

            if !observing() && !exhausted {
                Button {
                    class: "self-center",
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_more(),
                    "Show more posts"
                }
            }

            // Scrolling this into view loads more posts
            div { id: SENTINEL_ID, class: "h-1 w-full" }
        }
    }
}
