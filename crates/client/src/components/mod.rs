//! Page building blocks.

pub mod aside;
pub mod chat_box;
pub mod feed;
pub mod header;
pub mod sidebar;
pub mod ui;

pub use aside::Aside;
pub use chat_box::ChatBox;
pub use feed::Feed;
pub use header::Header;
pub use sidebar::Sidebar;
