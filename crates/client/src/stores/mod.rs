//! Global stores for application state.

pub mod session;

pub use session::{bump_scrolled_posts, scrolled_posts};
