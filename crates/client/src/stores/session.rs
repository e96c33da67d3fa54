//! Session-wide scroll counter read by the sidebar and bumped by the feed.

use dioxus::prelude::*;
use megalite_shared::ScrollCount;

/// Posts scrolled past since the page loaded.
pub static SCROLLED_POSTS: GlobalSignal<ScrollCount> = Signal::global(ScrollCount::default);

/// Current scroll count
pub fn scrolled_posts() -> ScrollCount {
    *SCROLLED_POSTS.read()
}

/// Record a newly revealed page of posts
pub fn bump_scrolled_posts() {
    let next = SCROLLED_POSTS.peek().bump();
    *SCROLLED_POSTS.write() = next;
}
