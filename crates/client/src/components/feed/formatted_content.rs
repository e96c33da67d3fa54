//! Renders a post body with clickable hashtags and links.

use dioxus::prelude::*;
use megalite_shared::{format_content, Segment, SegmentKind};

/// One paragraph per line of `text`. Hashtags and URLs open in a new tab.
#[component]
pub fn FormattedContent(text: Option<String>) -> Element {
    let lines = format_content(text.as_deref());

    rsx! {
        for (i, line) in lines.into_iter().enumerate() {
            p { key: "{i}", class: "mb-2 whitespace-pre-wrap break-words",
                for (j, segment) in line.segments.into_iter().enumerate() {
                    SegmentView { key: "{i}-{j}", segment }
                }
            }
        }
    }
}

#[component]
fn SegmentView(segment: Segment) -> Element {
    match segment.kind {
        SegmentKind::Text(text) => rsx! {
            span { "{text}" }
        },
        SegmentKind::Hashtag { tag, href } => rsx! {
            a {
                href,
                class: "text-blue-600 hover:underline",
                target: "_blank",
                rel: "noopener noreferrer",
                "#{tag}"
            }
        },
        SegmentKind::Link { url } => rsx! {
            a {
                href: "{url}",
                class: "text-blue-600 hover:underline break-words",
                target: "_blank",
                rel: "noopener noreferrer",
                "{url}"
            }
        },
    }
}
