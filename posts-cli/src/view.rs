use std::io::{self, Write};

use clap::ValueEnum;
use posts_core::{FormState, PostBlock, PostListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Человекочитаемый список.
    Text,
    /// Одна JSON-строка на отрисовку.
    Json,
    /// Разметка `<article>` на каждый пост.
    Html,
}

/// Контейнер и форма, отрисованные в поток вывода.
///
/// Методы `PostListView` не возвращают ошибок, поэтому первая ошибка записи
/// сохраняется и забирается через `take_error`.
pub(crate) struct TerminalView<W: Write> {
    out: W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub(crate) fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    pub(crate) fn message(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}");
        self.record(result);
    }

    pub(crate) fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    #[cfg(test)]
    pub(crate) fn writer(&self) -> &W {
        &self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    fn write_blocks(&mut self, blocks: &[PostBlock]) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "Постов: {}", blocks.len())?;
                for block in blocks {
                    writeln!(self.out, "- [{}] {} <{}>", block.id, block.title, block.link)?;
                    writeln!(self.out, "    {}", block.content)?;
                }
            }
            OutputFormat::Json => {
                let raw = serde_json::to_string(blocks).map_err(io::Error::other)?;
                writeln!(self.out, "{raw}")?;
            }
            OutputFormat::Html => {
                for block in blocks {
                    writeln!(self.out, "{}", block.to_html())?;
                }
            }
        }
        self.out.flush()
    }

    fn write_form(&mut self, form: &FormState) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => match form {
                FormState::Hidden => writeln!(self.out, "Форма скрыта (new - создать пост)")?,
                FormState::Visible(values) => {
                    match values.id {
                        Some(id) => writeln!(self.out, "Форма: редактирование поста id={id}")?,
                        None => writeln!(self.out, "Форма: новый пост")?,
                    }
                    writeln!(self.out, "  title: {}", values.title)?;
                    writeln!(self.out, "  content: {}", values.content)?;
                }
            },
            OutputFormat::Json => {
                let raw = serde_json::json!({
                    "form_visible": form.is_visible(),
                    "values": form.values(),
                });
                writeln!(self.out, "{raw}")?;
            }
            OutputFormat::Html => writeln!(self.out, "{}", form.to_html())?,
        }
        self.out.flush()
    }
}

impl<W: Write> PostListView for TerminalView<W> {
    fn render(&mut self, blocks: &[PostBlock]) {
        let result = self.write_blocks(blocks);
        self.record(result);
    }

    fn show_form(&mut self, form: &FormState) {
        let result = self.write_form(form);
        self.record(result);
    }
}
