//! Session scroll counter and the sidebar flavor text derived from it.

use crate::feed::{FEED_SIZE, PAGE_STEP};

/// Job titles earned by scrolling, ten posts per promotion.
pub const TITLES: [&str; 11] = [
    "Deadass Brokey",
    "Forex Trader",
    "Elon Glazer",
    "Assistant to the Regional Manager",
    "Professional Dogwalker",
    "Professional Dog",
    "Professional Doggystyler",
    "CEO of Bluechew",
    "Jeff Bezo's Wife",
    "Literally the President of America",
    "Enlightened God of LinkedIn",
];

const POSTS_PER_TITLE: u32 = 10;
const BASE_PROFILE_VIEWERS: u64 = 77;

/// Posts scrolled past this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollCount(u32);

impl ScrollCount {
    pub fn new(scrolled: u32) -> Self {
        Self(scrolled.min(FEED_SIZE as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Count one page of newly revealed posts.
    pub fn bump(self) -> Self {
        Self::new(self.0.saturating_add(PAGE_STEP as u32))
    }

    pub fn title(self) -> &'static str {
        profile_title(self.0)
    }

    pub fn profile_viewers(self) -> u64 {
        profile_viewers(self.0)
    }
}

pub fn profile_title(scrolled: u32) -> &'static str {
    let index = ((scrolled / POSTS_PER_TITLE) as usize).min(TITLES.len() - 1);
    TITLES[index]
}

/// 77 plus the cube of posts scrolled.
pub fn profile_viewers(scrolled: u32) -> u64 {
    BASE_PROFILE_VIEWERS.saturating_add(u64::from(scrolled).saturating_pow(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_broke() {
        let count = ScrollCount::default();
        assert_eq!(count.get(), 0);
        assert_eq!(count.title(), "Deadass Brokey");
        assert_eq!(count.profile_viewers(), 77);
    }

    #[test]
    fn title_promotes_every_ten_posts() {
        assert_eq!(profile_title(9), "Deadass Brokey");
        assert_eq!(profile_title(10), "Forex Trader");
        assert_eq!(profile_title(25), "Elon Glazer");
        assert_eq!(profile_title(49), "Professional Dogwalker");
        assert_eq!(profile_title(50), "Professional Dog");
    }

    #[test]
    fn title_clamps_to_last() {
        assert_eq!(profile_title(100), "Enlightened God of LinkedIn");
        assert_eq!(profile_title(u32::MAX), "Enlightened God of LinkedIn");
    }

    #[test]
    fn viewers_grow_cubically() {
        assert_eq!(profile_viewers(2), 85);
        assert_eq!(profile_viewers(10), 1077);
        assert_eq!(profile_viewers(50), 125_077);
        assert_eq!(profile_viewers(u32::MAX), u64::MAX);
    }

    #[test]
    fn bump_adds_a_page_and_caps() {
        let mut count = ScrollCount::default();
        count = count.bump();
        assert_eq!(count.get(), 2);
        for _ in 0..100 {
            count = count.bump();
        }
        assert_eq!(count.get(), 50);
        assert_eq!(ScrollCount::new(999).get(), 50);
    }
}
