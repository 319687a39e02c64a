use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Ссылка, которую получают посты без собственной страницы.
pub const LINK_PLACEHOLDER: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Идентификатор поста, уникальный среди постов в списке.
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .map(PostId)
            .map_err(|_| ParseError::InvalidPostId(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пост в списке.
pub struct Post {
    /// Идентификатор поста.
    pub id: PostId,
    /// Заголовок.
    pub title: String,
    /// Краткое содержимое.
    pub content: String,
    /// Ссылка на страницу поста; `None` означает [`LINK_PLACEHOLDER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Post {
    /// Создаёт пост с указанной ссылкой.
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            link,
        }
    }

    /// Возвращает ссылку поста или заглушку, если ссылки нет.
    pub fn link_or_placeholder(&self) -> &str {
        self.link.as_deref().unwrap_or(LINK_PLACEHOLDER)
    }
}

/// Стартовый набор постов: серия про хеш-таблицы с id 1..=3.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId(1),
            "Post #1: Introduction to Hash Tables",
            "Definition, key concepts and a visual illustration of how a hash function produces an index.",
            Some("posts/post1.html".to_string()),
        ),
        Post::new(
            PostId(2),
            "Post #2: Handling Collisions",
            "Chaining compared with open addressing (linear, quadratic and double hashing).",
            Some("posts/post2.html".to_string()),
        ),
        Post::new(
            PostId(3),
            "Post #3: Implementation and Core Operations",
            "Insert, lookup and delete in detail, with examples and code.",
            Some("posts/post3.html".to_string()),
        ),
    ]
}
