//! Megalite Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use megalite_client::{log_error, log_info, ApiClient, ClientConfig, Route};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("megalite_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        ClientConfig::from_env().unwrap_or_else(|e| {
            log_error!("invalid configuration, using defaults: {e:#}");
            ClientConfig::default()
        })
    });
    use_hook(|| log_info!("feed server: {}", config.api_base_url));
    use_context_provider(|| ApiClient::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        Router::<Route> {}
    }
}
