use leptos::ev::MouseEvent;
use leptos::prelude::*;
use posts_core::{PostAction, PostBlock, PostId};
use wasm_bindgen::JsCast;

use crate::delegation::parse_action_target;
use crate::state::SignalView;

#[component]
fn PostArticle(block: PostBlock) -> impl IntoView {
    let buttons = block
        .actions()
        .into_iter()
        .map(|tag| {
            view! {
                <button class=tag.kind.class_name() data-id=tag.id.to_string()>
                    {tag.kind.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <article>
            <h2>
                <a href=block.link>{block.title}</a>
            </h2>
            <p>{block.content}</p>
            <div class="post-actions">{buttons}</div>
        </article>
    }
}

/// Контейнер постов. Клики по кнопкам ловятся одним обработчиком на контейнере.
#[component]
pub(crate) fn PostList(
    ui: SignalView,
    on_action: Callback<(PostAction, PostId)>,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let Some(target) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let data_id = target.get_attribute("data-id");
        if let Some(action) = parse_action_target(&target.class_name(), data_id.as_deref()) {
            on_action.run(action);
        }
    };

    // Весь список пересоздаётся при каждом изменении blocks, без поэлементного диффа.
    view! {
        <section id="post-list" on:click=on_click>
            {move || {
                ui.blocks
                    .get()
                    .into_iter()
                    .map(|block| view! { <PostArticle block=block /> })
                    .collect_view()
            }}
        </section>
    }
}
