//! Ядро менеджера списка постов: модель, переходы состояния и контракт рендеринга.
//!
//! Библиотека не знает ничего о конкретном UI. Хост (браузер на Leptos или
//! терминал) реализует [`PostListView`] и [`Confirm`], а пользовательские
//! действия передаёт в [`PostListController`]:
//! - `render` полностью заменяет содержимое контейнера;
//! - `show_form` открывает форму создания/редактирования или скрывает её;
//! - `submit` создаёт или обновляет пост и закрывает форму;
//! - `handle_action` обрабатывает кнопки "Edit"/"Delete" конкретного поста.
//!
//! Всё состояние живёт в памяти и принадлежит контроллеру.
#![warn(missing_docs)]

mod controller;
mod error;
mod form;
mod ids;
mod post;
mod reducer;
mod render;

pub use controller::{Confirm, DELETE_CONFIRMATION, PostListController, PostListView};
pub use error::ParseError;
pub use form::{FormState, FormValues};
pub use ids::{IdGenerator, MonotonicIds};
pub use post::{LINK_PLACEHOLDER, Post, PostId, seed_posts};
pub use reducer::{Command, PostListState, reduce};
pub use render::{ActionTag, PostAction, PostBlock, render_posts};
