use std::io::{self, BufRead, Write};

use anyhow::Result;
use posts_core::{
    Confirm, IdGenerator, MonotonicIds, ParseError, PostAction, PostId, PostListController,
    PostListView,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::view::TerminalView;

const HELP: &str = "\
Команды:
  list             показать список постов
  new              открыть форму нового поста
  edit <id>        открыть форму редактирования
  title <text>     задать заголовок в открытой форме
  content <text>   задать содержимое в открытой форме
  save             отправить форму
  cancel           закрыть форму
  delete <id>      удалить пост (с подтверждением)
  help             эта справка
  quit             выход";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    List,
    New,
    Edit(PostId),
    Title(String),
    Content(String),
    Save,
    Cancel,
    Delete(PostId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ReplError {
    #[error("неизвестная команда '{0}', введите help")]
    UnknownCommand(String),

    #[error("команда '{0}' требует аргумент")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("форма закрыта: сначала new или edit <id>")]
    FormHidden,
}

fn parse_command(line: &str) -> Result<Option<ReplCommand>, ReplError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "list" | "ls" => ReplCommand::List,
        "new" => ReplCommand::New,
        "edit" => ReplCommand::Edit(parse_id("edit", rest)?),
        "delete" | "rm" => ReplCommand::Delete(parse_id("delete", rest)?),
        "title" => ReplCommand::Title(rest.to_string()),
        "content" => ReplCommand::Content(rest.to_string()),
        "save" | "submit" => ReplCommand::Save,
        "cancel" => ReplCommand::Cancel,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(ReplError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(command: &'static str, raw: &str) -> Result<PostId, ReplError> {
    if raw.is_empty() {
        return Err(ReplError::MissingArgument(command));
    }
    Ok(raw.parse::<PostId>()?)
}

/// Подтверждение удаления через ту же строку ввода, что и команды.
struct PromptConfirm<'a, R> {
    input: &'a mut R,
    assume_yes: bool,
}

impl<R: BufRead> PromptConfirm<'_, R> {
    fn ask(&mut self, message: &str) -> io::Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{message} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R: BufRead> Confirm for PromptConfirm<'_, R> {
    /// Ошибка ввода-вывода при вопросе считается отказом.
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        self.ask(message).unwrap_or_else(|err| {
            warn!(error = %err, "confirmation prompt failed, treating as declined");
            false
        })
    }
}

/// Цикл событий терминального хоста: одна строка ввода - одно действие.
pub(crate) struct Repl<R, W: Write, I = MonotonicIds> {
    input: R,
    controller: PostListController<TerminalView<W>, I>,
    assume_yes: bool,
}

impl<R: BufRead, W: Write, I: IdGenerator> Repl<R, W, I> {
    pub(crate) fn new(
        input: R,
        controller: PostListController<TerminalView<W>, I>,
        assume_yes: bool,
    ) -> Self {
        Self {
            input,
            controller,
            assume_yes,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        self.controller.mount();
        self.check_output()?;

        let mut line = String::new();
        loop {
            eprint!("> ");
            io::stderr().flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let keep_going = match parse_command(&line) {
                Ok(Some(command)) => self.execute(command),
                Ok(None) => Ok(true),
                Err(err) => Err(err),
            };

            match keep_going {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    debug!(error = %err, "command rejected");
                    self.controller.view_mut().message(&format!("Ошибка: {err}"));
                }
            }
            self.check_output()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: ReplCommand) -> Result<bool, ReplError> {
        match command {
            ReplCommand::List => self.controller.render(),
            ReplCommand::New => self.controller.open_create(),
            ReplCommand::Edit(id) => {
                self.controller
                    .handle_action(PostAction::Edit, id, &mut |_: &str| false);
            }
            ReplCommand::Delete(id) => {
                let mut confirm = PromptConfirm {
                    input: &mut self.input,
                    assume_yes: self.assume_yes,
                };
                self.controller
                    .handle_action(PostAction::Delete, id, &mut confirm);
            }
            ReplCommand::Title(text) => self.edit_field(|values| values.title = text)?,
            ReplCommand::Content(text) => self.edit_field(|values| values.content = text)?,
            ReplCommand::Save => {
                let values = self
                    .controller
                    .form()
                    .values()
                    .cloned()
                    .ok_or(ReplError::FormHidden)?;
                self.controller.submit(values);
            }
            ReplCommand::Cancel => self.controller.cancel(),
            ReplCommand::Help => self.controller.view_mut().message(HELP),
            ReplCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn edit_field(
        &mut self,
        apply: impl FnOnce(&mut posts_core::FormValues),
    ) -> Result<(), ReplError> {
        let values = self
            .controller
            .form_values_mut()
            .ok_or(ReplError::FormHidden)?;
        apply(values);

        let form = self.controller.form().clone();
        self.controller.view_mut().show_form(&form);
        Ok(())
    }

    fn check_output(&mut self) -> io::Result<()> {
        match self.controller.view_mut().take_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    fn controller(&self) -> &PostListController<TerminalView<W>, I> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use posts_core::{FormState, PostId, seed_posts};

    use super::*;
    use crate::view::OutputFormat;

    fn run_script(script: &str, assume_yes: bool) -> Repl<&[u8], Vec<u8>> {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        let controller = PostListController::new(seed_posts(), view);
        let mut repl = Repl::new(script.as_bytes(), controller, assume_yes);
        repl.run().expect("session must finish");
        repl
    }

    fn output(repl: &Repl<&[u8], Vec<u8>>) -> String {
        String::from_utf8(repl.controller().view().writer().clone()).expect("utf-8 output")
    }

    #[test]
    fn parse_command_handles_arguments_and_blank_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("edit 2"), Ok(Some(ReplCommand::Edit(PostId(2)))));
        assert_eq!(
            parse_command("title   Hello world  "),
            Ok(Some(ReplCommand::Title("Hello world".to_string())))
        );
        assert_eq!(parse_command("content"), Ok(Some(ReplCommand::Content(String::new()))));
    }

    #[test]
    fn parse_command_reports_bad_input() {
        assert_eq!(
            parse_command("publish"),
            Err(ReplError::UnknownCommand("publish".to_string()))
        );
        assert_eq!(parse_command("delete"), Err(ReplError::MissingArgument("delete")));
        assert!(matches!(parse_command("edit x1"), Err(ReplError::Parse(_))));
    }

    #[test]
    fn create_flow_appends_post() {
        let repl = run_script("new\ntitle  T \ncontent C\nsave\n", false);

        let posts = repl.controller().posts();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[3].title, "T");
        assert_eq!(posts[3].content, "C");
        assert_eq!(posts[3].id, PostId(4));
        assert_eq!(repl.controller().form(), &FormState::Hidden);
        assert!(output(&repl).contains("Постов: 4"));
    }

    #[test]
    fn edit_flow_changes_only_target_post() {
        let repl = run_script("edit 3\ntitle Renamed\nsave\n", false);

        let posts = repl.controller().posts();
        let seed = seed_posts();
        assert_eq!(posts[2].title, "Renamed");
        assert_eq!(posts[2].content, seed[2].content);
        assert_eq!(&posts[..2], &seed[..2]);
    }

    #[test]
    fn delete_reads_confirmation_from_input() {
        let repl = run_script("delete 2\ny\ndelete 1\nn\n", false);

        let ids: Vec<PostId> = repl.controller().posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PostId(1), PostId(3)]);
    }

    #[test]
    fn delete_with_assume_yes_skips_prompt() {
        let repl = run_script("delete 1\nlist\n", true);
        assert_eq!(repl.controller().posts().len(), 2);
    }

    struct FailingInput;

    impl io::Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal gone"))
        }
    }

    #[test]
    fn unreadable_confirmation_is_declined() {
        let mut input = io::BufReader::new(FailingInput);
        let mut confirm = PromptConfirm {
            input: &mut input,
            assume_yes: false,
        };

        assert!(matches!(confirm.ask("delete?"), Err(err) if err.kind() == io::ErrorKind::Other));
        assert!(!confirm.confirm("delete?"));
    }

    #[test]
    fn confirmation_reads_one_answer_line() {
        let mut input: &[u8] = b" YES \nn\n";
        let mut confirm = PromptConfirm {
            input: &mut input,
            assume_yes: false,
        };

        assert!(confirm.confirm("delete?"));
        assert!(!confirm.confirm("delete?"));
        assert!(!confirm.confirm("delete?"));
    }

    #[test]
    fn delete_at_end_of_input_is_declined() {
        let repl = run_script("delete 1\n", false);
        assert_eq!(repl.controller().posts().len(), 3);
    }

    #[test]
    fn bad_input_is_reported_and_session_continues() {
        let repl = run_script("frobnicate\nsave\ntitle x\nedit nope\nnew\ntitle ok\nsave\n", false);

        let out = output(&repl);
        assert!(out.contains("неизвестная команда 'frobnicate'"));
        assert!(out.contains("форма закрыта"));
        assert!(out.contains("invalid post id"));
        assert_eq!(repl.controller().posts().len(), 4);
    }

    #[test]
    fn edit_unknown_id_is_silent() {
        let repl = run_script("edit 99\n", false);
        assert_eq!(repl.controller().form(), &FormState::Hidden);
        assert!(!output(&repl).contains("Ошибка"));
    }

    #[test]
    fn quit_stops_before_remaining_commands() {
        let repl = run_script("quit\nnew\n", false);
        assert_eq!(repl.controller().form(), &FormState::Hidden);
    }
}
