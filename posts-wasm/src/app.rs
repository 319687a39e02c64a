use leptos::ev::MouseEvent;
use leptos::prelude::*;
use posts_core::{FormValues, PostAction, PostId, PostListController, seed_posts};

use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::confirm::BrowserConfirm;
use crate::state::SignalView;

#[component]
pub fn App() -> impl IntoView {
    let ui = SignalView::new();
    let controller = StoredValue::new(PostListController::new(seed_posts(), ui));
    controller.update_value(|c| c.mount());

    let on_new = move |_: MouseEvent| controller.update_value(|c| c.open_create());

    let on_cancel = Callback::new(move |_: ()| controller.update_value(|c| c.cancel()));

    let on_submit = Callback::new(move |values: FormValues| {
        controller.update_value(|c| c.submit(values));
    });

    let on_action = Callback::new(move |(kind, id): (PostAction, PostId)| {
        controller.update_value(|c| c.handle_action(kind, id, &mut BrowserConfirm));
    });

    view! {
        <main class="page">
            <section class="container">
                <h1>"Blog posts"</h1>

                <Show when=move || !ui.form_visible.get()>
                    <button id="new-post-btn" on:click=on_new>
                        "New post"
                    </button>
                </Show>

                <Show when=move || ui.form_visible.get()>
                    <PostForm ui=ui on_submit=on_submit on_cancel=on_cancel />
                </Show>

                <p style="margin-top: 0.5rem;">
                    "Posts: "
                    {move || ui.blocks.get().len()}
                </p>

                <PostList ui=ui on_action=on_action />
            </section>
        </main>
    }
}
