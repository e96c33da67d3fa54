//! UI-free building blocks for the megalite feed: content formatting, post
//! models, feed ordering and session flavor text.

pub mod error;
pub mod feed;
pub mod format;
pub mod models;
pub mod session;

pub use error::*;
pub use feed::{random_permutation, FeedWindow, FEED_SIZE, INITIAL_VISIBLE, PAGE_STEP};
pub use format::{format_content, FormattedLine, Segment, SegmentKind, HASHTAG_BASE_URL};
pub use models::*;
pub use session::ScrollCount;
