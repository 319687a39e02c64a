use std::fmt;
use std::str::FromStr;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::error::ParseError;
use crate::post::{Post, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// Действие над отрисованным постом.
pub enum PostAction {
    /// Открыть форму редактирования.
    Edit,
    /// Удалить после подтверждения.
    Delete,
}

impl PostAction {
    /// CSS-класс кнопки, по которому хост узнаёт действие.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Edit => "edit-btn",
            Self::Delete => "delete-btn",
        }
    }

    /// Подпись кнопки.
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for PostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for PostAction {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "edit-btn" | "edit" => Ok(Self::Edit),
            "delete-btn" | "delete" => Ok(Self::Delete),
            other => Err(ParseError::UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Кнопка действия, помеченная id поста.
pub struct ActionTag {
    /// Вид действия.
    pub kind: PostAction,
    /// Пост, к которому относится действие.
    pub id: PostId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Визуальный блок одного поста в контейнере.
pub struct PostBlock {
    /// Id поста.
    pub id: PostId,
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Ссылка заголовка (с подставленной заглушкой).
    pub link: String,
}

impl PostBlock {
    /// Строит блок из поста.
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            link: post.link_or_placeholder().to_string(),
        }
    }

    /// Кнопки блока: сначала редактирование, затем удаление.
    pub fn actions(&self) -> [ActionTag; 2] {
        [
            ActionTag {
                kind: PostAction::Edit,
                id: self.id,
            },
            ActionTag {
                kind: PostAction::Delete,
                id: self.id,
            },
        ]
    }

    /// Разметка `<article>` блока; текст и атрибуты экранируются.
    pub fn to_html(&self) -> String {
        let buttons: String = self
            .actions()
            .iter()
            .map(|tag| {
                format!(
                    r#"<button class="{}" data-id="{}">{}</button>"#,
                    tag.kind.class_name(),
                    tag.id,
                    tag.kind.label()
                )
            })
            .collect();

        format!(
            r#"<article><h2><a href="{}">{}</a></h2><p>{}</p><div class="post-actions">{}</div></article>"#,
            encode_double_quoted_attribute(&self.link),
            encode_text(&self.title),
            encode_text(&self.content),
            buttons
        )
    }
}

/// Один блок на пост, в порядке списка.
pub fn render_posts(posts: &[Post]) -> Vec<PostBlock> {
    posts.iter().map(PostBlock::from_post).collect()
}
