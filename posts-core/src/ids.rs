use crate::post::{Post, PostId};

/// Источник идентификаторов для новых постов.
pub trait IdGenerator {
    /// Возвращает следующий свободный идентификатор или `None`, если они закончились.
    fn next_id(&mut self) -> Option<PostId>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Монотонный счётчик: каждый следующий id строго больше предыдущего.
///
/// После `u64::MAX` счётчик исчерпан и больше ничего не выдаёт.
pub struct MonotonicIds {
    next: Option<u64>,
}

impl MonotonicIds {
    /// Счётчик, первым выдающий `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first.max(1)),
        }
    }

    /// Счётчик, продолжающий после максимального id в `posts`.
    pub fn after(posts: &[Post]) -> Self {
        let max = posts.iter().map(|post| post.id.0).max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&mut self) -> Option<PostId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(PostId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::seed_posts;

    #[test]
    fn after_continues_past_highest_existing_id() {
        let mut ids = MonotonicIds::after(&seed_posts());
        assert_eq!(ids.next_id(), Some(PostId(4)));
        assert_eq!(ids.next_id(), Some(PostId(5)));
    }

    #[test]
    fn after_empty_list_starts_at_one() {
        let mut ids = MonotonicIds::after(&[]);
        assert_eq!(ids.next_id(), Some(PostId(1)));
    }

    #[test]
    fn rapid_generation_never_repeats() {
        let mut ids = MonotonicIds::default();
        let seen: Vec<PostId> = (0..1000).filter_map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn counter_is_exhausted_at_top_of_range_instead_of_repeating() {
        let near_max = Post::new(PostId(u64::MAX - 1), "t", "c", None);
        let mut ids = MonotonicIds::after(&[near_max]);

        assert_eq!(ids.next_id(), Some(PostId(u64::MAX)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn after_post_with_max_id_yields_nothing() {
        let at_max = Post::new(PostId(u64::MAX), "t", "c", None);
        let mut ids = MonotonicIds::after(&[at_max]);
        assert_eq!(ids.next_id(), None);
    }
}
