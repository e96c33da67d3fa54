//! Fetches one post by id and renders it.

use dioxus::prelude::*;

use super::FeedItem;
use crate::api_client::ApiClient;

#[component]
pub fn FeedPost(post_id: usize) -> Element {
    let client = use_context::<ApiClient>();
    let id = use_signal(|| post_id);

    let post = use_resource(move || {
        let client = client.clone();
        let post_id = id();
        async move {
            client.fetch_post(post_id).await.map_err(|e| {
                crate::log_warn!("post {post_id} unavailable: {e}");
                e.user_message()
            })
        }
    });

    match &*post.read() {
        None => rsx! {
            div { class: "p-4 bg-white rounded shadow text-sm text-zinc-500", "Loading post..." }
        },
        Some(Err(message)) => rsx! {
            div { class: "p-4 bg-white rounded shadow text-sm text-zinc-500", "{message}" }
        },
        Some(Ok(post)) => rsx! {
            FeedItem { post: post.clone() }
        },
    }
}
