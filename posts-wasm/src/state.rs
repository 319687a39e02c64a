use leptos::prelude::*;
use posts_core::{FormState, FormValues, PostBlock, PostId, PostListView};

/// Сигналы, которые отражают контейнер и поля формы в DOM.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignalView {
    pub(crate) blocks: RwSignal<Vec<PostBlock>>,
    pub(crate) form_visible: RwSignal<bool>,
    pub(crate) post_id: RwSignal<Option<PostId>>,
    pub(crate) title: RwSignal<String>,
    pub(crate) content: RwSignal<String>,
}

impl SignalView {
    pub(crate) fn new() -> Self {
        Self {
            blocks: RwSignal::new(Vec::new()),
            form_visible: RwSignal::new(false),
            post_id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
        }
    }

    /// Текущие значения полей формы, как их ввёл пользователь.
    pub(crate) fn form_values(&self) -> FormValues {
        FormValues {
            id: self.post_id.get_untracked(),
            title: self.title.get_untracked(),
            content: self.content.get_untracked(),
        }
    }
}

impl PostListView for SignalView {
    fn render(&mut self, blocks: &[PostBlock]) {
        self.blocks.set(blocks.to_vec());
    }

    fn show_form(&mut self, form: &FormState) {
        let values = form.values().cloned().unwrap_or_default();
        self.post_id.set(values.id);
        self.title.set(values.title);
        self.content.set(values.content);
        self.form_visible.set(form.is_visible());
    }
}
