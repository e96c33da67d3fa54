//! Feed ordering and the infinite-scroll window.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of posts the feed server knows about (ids `0..FEED_SIZE`).
pub const FEED_SIZE: usize = 50;
/// Posts shown before the first scroll.
pub const INITIAL_VISIBLE: usize = 5;
/// Posts revealed each time the bottom of the feed comes into view.
pub const PAGE_STEP: usize = 2;

/// A uniformly random ordering of `0..n` (Fisher-Yates).
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut ids: Vec<usize> = (0..n).collect();
    ids.shuffle(rng);
    ids
}

/// How many posts of the feed are currently mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    visible: usize,
    limit: usize,
}

impl Default for FeedWindow {
    fn default() -> Self {
        Self::new(FEED_SIZE)
    }
}

impl FeedWindow {
    pub fn new(limit: usize) -> Self {
        Self {
            visible: INITIAL_VISIBLE.min(limit),
            limit,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_exhausted(&self) -> bool {
        self.visible >= self.limit
    }

    /// Reveal the next page. Returns `false` once everything is visible.
    pub fn advance(&mut self) -> bool {
        let next = (self.visible + PAGE_STEP).min(self.limit);
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    /// The ids to render, in feed order.
    pub fn visible_ids<'a>(&self, order: &'a [usize]) -> &'a [usize] {
        &order[..self.visible.min(order.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn permutation_contains_every_id_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = random_permutation(FEED_SIZE, &mut rng);
        assert_eq!(ids.len(), FEED_SIZE);
        ids.sort_unstable();
        assert_eq!(ids, (0..FEED_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn permutation_depends_on_rng() {
        let a = random_permutation(FEED_SIZE, &mut StdRng::seed_from_u64(1));
        let b = random_permutation(FEED_SIZE, &mut StdRng::seed_from_u64(2));
        let a_again = random_permutation(FEED_SIZE, &mut StdRng::seed_from_u64(1));
        assert_ne!(a, b);
        assert_eq!(a, a_again);
    }

    #[test]
    fn permutation_of_nothing() {
        assert!(random_permutation(0, &mut StdRng::seed_from_u64(0)).is_empty());
    }

    #[test]
    fn window_starts_at_initial_page() {
        let window = FeedWindow::default();
        assert_eq!(window.visible(), INITIAL_VISIBLE);
        assert!(!window.is_exhausted());
    }

    #[test]
    fn window_grows_by_step_and_caps() {
        let mut window = FeedWindow::default();
        assert!(window.advance());
        assert_eq!(window.visible(), INITIAL_VISIBLE + PAGE_STEP);

        let mut advances = 1;
        while window.advance() {
            advances += 1;
        }
        assert_eq!(window.visible(), FEED_SIZE);
        assert!(window.is_exhausted());
        // 5 -> 7 -> ... -> 49 -> 50
        assert_eq!(advances, 23);
        assert!(!window.advance());
        assert_eq!(window.visible(), FEED_SIZE);
    }

    #[test]
    fn small_feed_starts_exhausted() {
        let mut window = FeedWindow::new(3);
        assert_eq!(window.visible(), 3);
        assert!(window.is_exhausted());
        assert!(!window.advance());
    }

    #[test]
    fn visible_ids_follow_order() {
        let order = vec![9, 4, 1, 7, 3, 0, 2];
        let mut window = FeedWindow::new(order.len());
        assert_eq!(window.visible_ids(&order), &[9, 4, 1, 7, 3]);
        window.advance();
        assert_eq!(window.visible_ids(&order), &order[..]);
    }

    #[test]
    fn visible_ids_tolerate_short_order() {
        let window = FeedWindow::default();
        assert_eq!(window.visible_ids(&[2, 1]), &[2, 1]);
        assert!(window.visible_ids(&[]).is_empty());
    }
}
