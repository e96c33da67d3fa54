//! Feed components.
//!
//! - `Feed`: the main column with the infinite post list
//! - `FeedPost`: fetches a single post
//! - `FeedItem`: renders a fetched post
//! - `FormattedContent`: post body with clickable hashtags and links

pub mod feed_item;
pub mod feed_list;
pub mod feed_post;
pub mod formatted_content;
pub mod sort_by_divider;
pub mod write_post_card;

pub use feed_item::FeedItem;
pub use feed_list::Feed;
pub use feed_post::FeedPost;
pub use formatted_content::FormattedContent;
pub use sort_by_divider::SortByDivider;
pub use write_post_card::WriteNewPostCard;
