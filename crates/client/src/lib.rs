//! Megalite Client - Dioxus web application
//!
//! The satirical professional-network feed: profile sidebar, infinite post
//! feed and assorted decorative widgets.

pub mod api_client;
pub mod config;
pub mod logging;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use routes::Route;
