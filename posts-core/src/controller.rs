use tracing::debug;

use crate::form::{FormState, FormValues};
use crate::ids::{IdGenerator, MonotonicIds};
use crate::post::{Post, PostId};
use crate::reducer::{Command, PostListState, reduce};
use crate::render::{PostAction, PostBlock, render_posts};

/// Текст вопроса перед удалением поста.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";

/// UI-поверхность, в которую контроллер отрисовывает состояние.
pub trait PostListView {
    /// Полностью заменяет содержимое контейнера блоками постов.
    fn render(&mut self, blocks: &[PostBlock]);

    /// Показывает/скрывает форму и записывает значения её полей.
    fn show_form(&mut self, form: &FormState);
}

/// Блокирующий запрос подтверждения у пользователя.
pub trait Confirm {
    /// `true`, если пользователь согласился.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Владелец списка постов и формы; единственная точка изменения состояния.
pub struct PostListController<V, I = MonotonicIds> {
    state: PostListState,
    ids: I,
    view: V,
}

impl<V: PostListView> PostListController<V, MonotonicIds> {
    /// Контроллер над `posts`; новые id продолжают максимальный из имеющихся.
    pub fn new(posts: Vec<Post>, view: V) -> Self {
        let ids = MonotonicIds::after(&posts);
        Self::with_ids(posts, ids, view)
    }
}

impl<V: PostListView, I: IdGenerator> PostListController<V, I> {
    /// Контроллер с явно переданным генератором id.
    pub fn with_ids(posts: Vec<Post>, ids: I, view: V) -> Self {
        Self {
            state: PostListState::with_posts(posts),
            ids,
            view,
        }
    }

    /// Первичная отрисовка: список постов и скрытая форма.
    pub fn mount(&mut self) {
        self.render();
        self.view.show_form(&self.state.form);
    }

    /// Перерисовывает контейнер целиком.
    pub fn render(&mut self) {
        let blocks = render_posts(&self.state.posts);
        self.view.render(&blocks);
    }

    /// Показывает форму (для создания при `post == None`, иначе для
    /// редактирования `post`) или скрывает её при `visible == false`.
    pub fn show_form(&mut self, visible: bool, post: Option<&Post>) {
        self.state.form = match (visible, post) {
            (false, _) => FormState::Hidden,
            (true, None) => FormState::Visible(FormValues::empty()),
            (true, Some(post)) => FormState::Visible(FormValues::from_post(post)),
        };
        self.view.show_form(&self.state.form);
    }

    /// Кнопка "новый пост".
    pub fn open_create(&mut self) {
        self.dispatch(Command::OpenCreate);
    }

    /// Кнопка отмены в форме.
    pub fn cancel(&mut self) {
        self.dispatch(Command::Cancel);
    }

    /// Отправка формы: обновление или создание поста, перерисовка, закрытие формы.
    pub fn submit(&mut self, values: FormValues) {
        self.dispatch(Command::Submit(values));
    }

    /// Обработка кнопок поста.
    ///
    /// Удаление выполняется только после подтверждения через `confirm`;
    /// редактирование несуществующего поста ничего не делает.
    pub fn handle_action<C>(&mut self, kind: PostAction, id: PostId, confirm: &mut C)
    where
        C: Confirm + ?Sized,
    {
        match kind {
            PostAction::Delete => {
                if confirm.confirm(DELETE_CONFIRMATION) {
                    self.dispatch(Command::Delete(id));
                } else {
                    debug!(post_id = %id, "delete declined");
                }
            }
            PostAction::Edit => self.dispatch(Command::OpenEdit(id)),
        }
    }

    /// Применяет команду и синхронизирует представление.
    pub fn dispatch(&mut self, command: Command) {
        let sync = ViewSync::for_command(&command, &self.state);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, command, &mut self.ids);

        if sync.render {
            self.render();
        }
        if sync.form {
            self.view.show_form(&self.state.form);
        }
    }

    /// Посты в порядке отображения.
    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    /// Пост по id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.state.find(id)
    }

    /// Текущее состояние формы.
    pub fn form(&self) -> &FormState {
        &self.state.form
    }

    /// Полное состояние.
    pub fn state(&self) -> &PostListState {
        &self.state
    }

    /// UI-поверхность.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Изменяемый доступ к UI-поверхности.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Изменяемый доступ к полям открытой формы (ввод пользователя).
    pub fn form_values_mut(&mut self) -> Option<&mut FormValues> {
        self.state.form.values_mut()
    }
}

// Какие части представления обновить после команды.
struct ViewSync {
    render: bool,
    form: bool,
}

impl ViewSync {
    fn for_command(command: &Command, state: &PostListState) -> Self {
        match command {
            Command::Submit(_) => Self { render: true, form: true },
            Command::Delete(_) => Self { render: true, form: false },
            Command::OpenCreate | Command::Cancel => Self { render: false, form: true },
            Command::OpenEdit(id) => Self {
                render: false,
                form: state.find(*id).is_some(),
            },
        }
    }
}
