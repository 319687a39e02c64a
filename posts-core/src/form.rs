use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::post::{Post, PostId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Значения полей формы: заголовок, содержимое и скрытый id.
pub struct FormValues {
    /// `Some` при редактировании существующего поста, `None` при создании.
    pub id: Option<PostId>,
    /// Поле заголовка.
    pub title: String,
    /// Поле содержимого.
    pub content: String,
}

impl FormValues {
    /// Пустая форма создания поста.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Форма редактирования, заполненная из поста.
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: Some(post.id),
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    /// Обрезает пробелы по краям заголовка и содержимого.
    ///
    /// Пустые значения не отклоняются.
    pub fn trimmed(self) -> Self {
        Self {
            id: self.id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Состояние формы создания/редактирования.
pub enum FormState {
    /// Форма скрыта, видна кнопка создания поста.
    #[default]
    Hidden,
    /// Форма открыта с указанными значениями полей.
    Visible(FormValues),
}

impl FormState {
    /// Открыта ли форма.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Значения полей открытой формы.
    pub fn values(&self) -> Option<&FormValues> {
        match self {
            Self::Hidden => None,
            Self::Visible(values) => Some(values),
        }
    }

    /// Id редактируемого поста, если форма открыта в режиме редактирования.
    pub fn editing_id(&self) -> Option<PostId> {
        self.values().and_then(|values| values.id)
    }

    /// Изменяемый доступ к полям открытой формы.
    pub fn values_mut(&mut self) -> Option<&mut FormValues> {
        match self {
            Self::Hidden => None,
            Self::Visible(values) => Some(values),
        }
    }

    /// Разметка формы с полями id/title/content; скрытая форма - пустой `<form hidden>`.
    pub fn to_html(&self) -> String {
        let Some(values) = self.values() else {
            return r#"<form id="post-form" hidden></form>"#.to_string();
        };
        let id = values.id.map(|id| id.to_string()).unwrap_or_default();

        format!(
            concat!(
                r#"<form id="post-form">"#,
                r#"<input type="hidden" id="post-id" value="{}">"#,
                r#"<input id="post-title" value="{}">"#,
                r#"<textarea id="post-content">{}</textarea>"#,
                r#"<button type="submit">Save</button>"#,
                r#"<button type="button" id="cancel-btn">Cancel</button>"#,
                "</form>"
            ),
            id,
            encode_double_quoted_attribute(&values.title),
            encode_text(&values.content),
        )
    }
}
