use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use posts_core::FormValues;

use crate::state::SignalView;

#[component]
pub(crate) fn PostForm(
    ui: SignalView,
    on_submit: Callback<FormValues>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(ui.form_values());
    };

    let heading = move || {
        if ui.post_id.get().is_some() {
            "Edit post"
        } else {
            "New post"
        }
    };

    view! {
        <div id="post-form-container">
            <h2>{heading}</h2>
            <form id="post-form" on:submit=submit>
                <input
                    type="hidden"
                    id="post-id"
                    prop:value=move || ui.post_id.get().map(|id| id.to_string()).unwrap_or_default()
                />
                <input
                    id="post-title"
                    placeholder="title"
                    prop:value=move || ui.title.get()
                    on:input=move |ev| ui.title.set(event_target_value(&ev))
                />
                <textarea
                    id="post-content"
                    placeholder="content"
                    prop:value=move || ui.content.get()
                    on:input=move |ev| ui.content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Save"</button>
                <button
                    type="button"
                    id="cancel-btn"
                    style="margin-left: 0.5rem;"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </form>
        </div>
    }
}
