use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use posts_core::{PostListController, seed_posts};
use tracing::info;

mod logging;
mod repl;
mod settings;
mod view;

use logging::init_logging;
use repl::Repl;
use settings::Settings;
use view::{OutputFormat, TerminalView};

#[derive(Debug, Parser)]
#[command(name = "posts-cli", version, about = "Терминальный менеджер списка постов")]
struct Cli {
    /// Начать с пустого списка вместо стартовых постов.
    #[arg(long)]
    no_seed: bool,

    /// Удалять без вопроса о подтверждении.
    #[arg(long)]
    assume_yes: bool,

    /// Формат отрисовки списка.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Итоговые параметры сессии: переменные окружения и флаги вместе.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionOptions {
    seed_posts: bool,
    assume_yes: bool,
    format: OutputFormat,
}

impl SessionOptions {
    /// `--no-seed` отключает стартовые посты, `--assume-yes` включает удаление без вопроса;
    /// флаг только усиливает окружение, но не отменяет его.
    fn merge(settings: &Settings, cli: &Cli) -> Self {
        Self {
            seed_posts: settings.seed_posts && !cli.no_seed,
            assume_yes: settings.assume_yes || cli.assume_yes,
            format: cli.format,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let options = SessionOptions::merge(&settings, &cli);
    let posts = if options.seed_posts { seed_posts() } else { Vec::new() };
    info!(posts = posts.len(), format = ?options.format, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let view = TerminalView::new(stdout.lock(), options.format);
    let controller = PostListController::new(posts, view);

    Repl::new(stdin.lock(), controller, options.assume_yes)
        .run()
        .context("сессия прервана")?;

    info!("session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_seeded_text_session() {
        let cli = Cli::parse_from(["posts-cli"]);
        assert!(!cli.no_seed);
        assert!(!cli.assume_yes);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["posts-cli", "--no-seed", "--assume-yes", "--format", "json"]);
        assert!(cli.no_seed);
        assert!(cli.assume_yes);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    fn settings(seed_posts: bool, assume_yes: bool) -> Settings {
        Settings {
            log_level: "info".to_string(),
            seed_posts,
            assume_yes,
        }
    }

    #[test]
    fn merge_with_defaults_seeds_and_asks() {
        let options = SessionOptions::merge(&settings(true, false), &Cli::parse_from(["posts-cli"]));
        assert_eq!(
            options,
            SessionOptions {
                seed_posts: true,
                assume_yes: false,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn merge_takes_environment_alone() {
        let options = SessionOptions::merge(&settings(false, true), &Cli::parse_from(["posts-cli"]));
        assert!(!options.seed_posts);
        assert!(options.assume_yes);
    }

    #[test]
    fn merge_takes_flags_alone() {
        let cli = Cli::parse_from(["posts-cli", "--no-seed", "--assume-yes", "--format", "html"]);
        let options = SessionOptions::merge(&settings(true, false), &cli);
        assert!(!options.seed_posts);
        assert!(options.assume_yes);
        assert_eq!(options.format, OutputFormat::Html);
    }

    #[test]
    fn merge_with_both_sources_agreeing() {
        let cli = Cli::parse_from(["posts-cli", "--no-seed", "--assume-yes"]);
        let options = SessionOptions::merge(&settings(false, true), &cli);
        assert!(!options.seed_posts);
        assert!(options.assume_yes);
    }
}
