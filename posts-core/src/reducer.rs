use tracing::{debug, info, warn};

use crate::form::{FormState, FormValues};
use crate::ids::IdGenerator;
use crate::post::{LINK_PLACEHOLDER, Post, PostId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Команда, в которую превращается одно пользовательское действие.
pub enum Command {
    /// Открыть пустую форму создания.
    OpenCreate,
    /// Открыть форму редактирования поста.
    OpenEdit(PostId),
    /// Закрыть форму без изменений.
    Cancel,
    /// Отправить форму.
    Submit(FormValues),
    /// Удалить пост (подтверждение уже получено).
    Delete(PostId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Полное состояние: список постов и форма.
pub struct PostListState {
    /// Посты в порядке отображения.
    pub posts: Vec<Post>,
    /// Состояние формы.
    pub form: FormState,
}

impl PostListState {
    /// Состояние со списком постов и скрытой формой.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            form: FormState::Hidden,
        }
    }

    /// Ищет пост по id.
    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

/// Переход `(state, command) -> state'`.
///
/// Единственный побочный эффект - выдача нового id из `ids` при создании поста.
/// Если id закончились, пост не создаётся, а форма всё равно закрывается.
pub fn reduce<I>(mut state: PostListState, command: Command, ids: &mut I) -> PostListState
where
    I: IdGenerator + ?Sized,
{
    match command {
        Command::OpenCreate => {
            debug!("form opened for create");
            state.form = FormState::Visible(FormValues::empty());
        }
        Command::OpenEdit(id) => match state.find(id).map(FormValues::from_post) {
            Some(values) => {
                debug!(post_id = %id, "form opened for edit");
                state.form = FormState::Visible(values);
            }
            None => debug!(post_id = %id, "edit requested for unknown post, ignored"),
        },
        Command::Cancel => {
            debug!("form cancelled");
            state.form = FormState::Hidden;
        }
        Command::Submit(values) => {
            let FormValues { id, title, content } = values.trimmed();
            match id {
                Some(id) => {
                    if let Some(post) = state.posts.iter_mut().find(|post| post.id == id) {
                        post.title = title;
                        post.content = content;
                        info!(post_id = %id, "post updated");
                    } else {
                        debug!(post_id = %id, "submit for unknown post, nothing updated");
                    }
                }
                None => match ids.next_id() {
                    Some(id) => {
                        state.posts.push(Post::new(
                            id,
                            title,
                            content,
                            Some(LINK_PLACEHOLDER.to_string()),
                        ));
                        info!(post_id = %id, "post created");
                    }
                    None => warn!("post ids exhausted, new post not created"),
                },
            }
            state.form = FormState::Hidden;
        }
        Command::Delete(id) => {
            let before = state.posts.len();
            state.posts.retain(|post| post.id != id);
            if state.posts.len() < before {
                info!(post_id = %id, "post deleted");
            } else {
                debug!(post_id = %id, "delete for unknown post, ignored");
            }
        }
    }
    state
}
