mod infinite_scroll;

pub use infinite_scroll::use_infinite_scroll;
