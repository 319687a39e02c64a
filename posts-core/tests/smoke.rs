use posts_core::{
    Command, FormState, FormValues, PostAction, PostBlock, PostId, PostListController,
    PostListView, seed_posts,
};

#[derive(Default)]
struct HtmlContainer {
    html: String,
    form_visible: bool,
    renders: usize,
}

impl PostListView for HtmlContainer {
    fn render(&mut self, blocks: &[PostBlock]) {
        self.html = blocks.iter().map(PostBlock::to_html).collect();
        self.renders += 1;
    }

    fn show_form(&mut self, form: &FormState) {
        self.form_visible = form.is_visible();
    }
}

#[test]
fn full_session_through_public_api() {
    let mut controller = PostListController::new(seed_posts(), HtmlContainer::default());
    controller.mount();
    assert_eq!(controller.view().html.matches("<article>").count(), 3);
    assert!(!controller.view().form_visible);

    controller.open_create();
    assert!(controller.view().form_visible);
    controller.submit(FormValues {
        id: None,
        title: "  Bloom filters ".to_string(),
        content: "Probabilistic membership".to_string(),
    });
    assert!(!controller.view().form_visible);
    assert_eq!(controller.view().html.matches("<article>").count(), 4);
    assert!(controller.view().html.contains("Bloom filters"));

    let new_id = controller.posts()[3].id;
    assert!(new_id > PostId(3));

    controller.handle_action(PostAction::Delete, PostId(1), &mut |_: &str| false);
    assert_eq!(controller.posts().len(), 4);

    controller.handle_action(PostAction::Delete, PostId(1), &mut |_: &str| true);
    assert_eq!(controller.posts().len(), 3);
    assert!(!controller.view().html.contains(r#"data-id="1""#));

    controller.dispatch(Command::OpenEdit(new_id));
    assert_eq!(controller.form().editing_id(), Some(new_id));
    controller.dispatch(Command::Cancel);
    assert_eq!(controller.form(), &FormState::Hidden);
}
