use posts_core::Confirm;

/// `window.confirm`; без окна или при ошибке вызова ответ - "нет".
pub(crate) struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
