//! Post card: author header, formatted body, link preview, counters and actions.

use chrono::Utc;
use dioxus::prelude::*;
use megalite_shared::{extract_domain, relative_age, LinkPreview, Post, Stats};

use super::FormattedContent;
use crate::components::ui::{AvatarSize, Card, UserAvatar};

/// FeedItem - one post in the feed.
///
/// ```text
/// +-------------------------------------------------------+
/// |  (A)  Chad Synergy • 1st                              |
/// |       Thought Leader | 10x Ninja • 3d                 |
/// |                                                       |
/// |  Grateful to announce... #hustle https://...          |
/// |-------------------------------------------------------|
/// |  [ link preview: title / domain ]                     |
/// |  💡 12                      3 comments • 1 reposts    |
/// |  Like     Comment     Repost     Send                 |
/// +-------------------------------------------------------+
/// ```
#[component]
pub fn FeedItem(post: Post) -> Element {
    let age = post.published_at().map(|then| relative_age(then, Utc::now()));
    let author = post.author.clone();

    rsx! {
        Card { class: "p-0 mt-2",
            div { class: "flex flex-row p-4",
                UserAvatar {
                    name: author.name.clone(),
                    image_url: author.image_url.clone(),
                    size: AvatarSize::Medium,
                }
                div { class: "pl-4",
                    div { class: "flex flex-row items-center",
                        div { class: "font-semibold", "{author.name}" }
                        if !author.connection_degree.is_empty() {
                            div { class: "ml-2 text-zinc-500 text-sm", "• {author.connection_degree}" }
                        }
                    }
                    div { class: "text-xs text-zinc-500",
                        "{author.subtext}"
                        if let Some(age) = age {
                            span { class: "ml-1", "• {age}" }
                        }
                    }
                }
            }

            div { class: "p-4 text-sm pt-0",
                FormattedContent { text: post.content.clone() }
            }

            if let Some(thumbnail) = post.thumbnail.clone() {
                img { class: "w-full h-auto", src: "{thumbnail}", alt: "Post thumbnail" }
            }

            if let Some(link) = post.link.clone() {
                LinkPreviewCard { link }
            }

            if let Some(stats) = post.stats {
                LikesCountRow { stats }
            }
            ActionsRow {}
        }
    }
}

#[component]
fn LinkPreviewCard(link: LinkPreview) -> Element {
    let Some(href) = link.target().map(str::to_string) else {
        return rsx! {};
    };
    let domain = extract_domain(&href);
    let title = link.title.clone().unwrap_or_default();
    let alt = link
        .title
        .clone()
        .unwrap_or_else(|| "Linked content".to_string());

    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: "block hover:opacity-90 transition-opacity",
            if let Some(thumbnail) = link.thumbnail.clone() {
                img { class: "w-full h-auto", src: "{thumbnail}", alt: "{alt}" }
            }
            div { class: "p-4 bg-slate-200",
                div { class: "text-sm font-semibold hover:underline", "{title}" }
                div { class: "text-xs text-zinc-500 mt-1", "{domain}" }
            }
        }
    }
}

#[component]
fn LikesCountRow(stats: Stats) -> Element {
    if stats.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "text-zinc-500 text-xs p-2 px-4 flex flex-row items-center border-b",
            if stats.likes > 0 {
                div { class: "w-full flex flex-row items-center hover:text-blue-600 hover:underline cursor-pointer",
                    // Lightbulb
                    svg {
                        class: "w-4 h-4",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M9 18h6M10 22h4M12 2a7 7 0 00-4 12.74V17h8v-2.26A7 7 0 0012 2z",
                        }
                    }
                    span { class: "ml-1", "{stats.likes}" }
                }
            }
            if stats.comments > 0 {
                div { class: "hover:text-blue-600 hover:underline cursor-pointer shrink-0",
                    "{stats.comments} comments"
                }
            }
            if stats.reposts > 0 {
                div { class: "hover:text-blue-600 hover:underline cursor-pointer shrink-0 ml-2",
                    span { class: "mr-1", "•" }
                    "{stats.reposts} reposts"
                }
            }
        }
    }
}

const ACTIONS: [(&str, &str); 4] = [
    ("Like", "M14 9V5a3 3 0 00-3-3l-4 9v11h11.28a2 2 0 002-1.7l1.38-9a2 2 0 00-2-2.3zM7 22H4a2 2 0 01-2-2v-7a2 2 0 012-2h3"),
    ("Comment", "M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z"),
    ("Repost", "M17 1l4 4-4 4M3 11V9a4 4 0 014-4h14M7 23l-4-4 4-4M21 13v2a4 4 0 01-4 4H3"),
    ("Send", "M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z"),
];

#[component]
fn ActionsRow() -> Element {
    rsx! {
        div { class: "flex flex-row justify-between items-center py-2 px-4",
            for (label, icon) in ACTIONS {
                div {
                    key: "{label}",
                    class: "p-2 rounded hover:bg-zinc-200 flex flex-row text-zinc-500 text-sm items-center cursor-pointer transition-all",
                    svg {
                        class: "w-5 h-5",
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
                    span { class: "font-semibold ml-2 hidden sm:inline", "{label}" }
                }
            }
        }
    }
}
