use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки разбора значений, приходящих с границы UI (`data-id`, классы кнопок, аргументы).
pub enum ParseError {
    /// Строка не является идентификатором поста.
    #[error("invalid post id: '{0}'")]
    InvalidPostId(String),

    /// Неизвестный класс кнопки действия.
    #[error("unknown post action: '{0}'")]
    UnknownAction(String),
}
