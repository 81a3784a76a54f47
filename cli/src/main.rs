//! CLI entrypoint for trivia
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trivia_application::{PlayQuizInput, QuestionStore, RandomSource, SubmitQuestionInput};
use trivia_domain::{CategoryId, QuestionDraft, QuestionId, QuizCategory};
use trivia_infrastructure::{
    ConfigLoader, FileConfig, InMemoryQuestionStore, JsonFileQuestionStore, StoreBackend,
    ThreadRandomSource,
};
use trivia_presentation::{
    ApiError, Cli, Command, QuizRepl, Reply, StoreKind, TriviaApi, formatter_for, serve,
    set_color_enabled,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    let _log_guard = init_logging(cli.verbose, &config)?;
    info!("Starting trivia");

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `trivia --help` for usage.");
    };

    // === Dependency Injection ===
    let store = open_store(&config).await?;
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource::new());
    let api = TriviaApi::new(
        Arc::clone(&store),
        Arc::clone(&random),
        config.questions.to_behavior(),
    );

    let result = match command {
        Command::ServeStdin => {
            let reader = tokio::io::BufReader::new(tokio::io::stdin());
            let served = serve(&api, reader, tokio::io::stdout()).await?;
            info!("Served {} requests", served);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Play { category, rounds } => {
            let mut repl = QuizRepl::new(store, random)
                .with_rounds(rounds.unwrap_or(config.quiz.questions_per_play));
            if let Some(id) = category {
                repl = repl.with_category(CategoryId::new(id));
            }
            repl.run().await?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Categories => api.categories().await,
        Command::Questions { page } => api.questions(page).await,
        Command::Category { id } => api.category_questions(CategoryId::new(id)).await,
        Command::Search { term } if term.is_empty() => {
            Err(ApiError::Malformed("search term must not be empty".into()))
        }
        Command::Search { term } => {
            api.submit_question(SubmitQuestionInput {
                draft: QuestionDraft::new(),
                search_term: Some(term),
            })
            .await
        }
        Command::Add {
            question,
            answer,
            category,
            difficulty,
        } => {
            let draft = QuestionDraft::new()
                .with_question(question)
                .with_answer(answer)
                .with_category(category)
                .with_difficulty(difficulty);
            api.submit_question(SubmitQuestionInput {
                draft,
                search_term: None,
            })
            .await
        }
        Command::Delete { id } => api.delete_question(QuestionId::new(id)).await,
        Command::Quiz { previous, category } => {
            let input = PlayQuizInput {
                previous_questions: previous
                    .map(|ids| ids.into_iter().map(QuestionId::new).collect()),
                quiz_category: category.map(QuizCategory::new),
            };
            api.next_quiz_question(input).await
        }
    };

    Ok(print_result(result, &config))
}

/// Command-line flags win over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(store) = cli.store {
        config.store.backend = match store {
            StoreKind::Json => StoreBackend::Json,
            StoreKind::Memory => StoreBackend::Memory,
        };
    }
    if let Some(path) = &cli.store_path {
        config.store.path = Some(path.clone());
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
}

/// Initialize logging based on verbosity level, `RUST_LOG` and config.
///
/// Logs go to stderr so stdout carries only results. The returned guard
/// flushes the log file and must live until exit.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = config.logging.level.as_deref().unwrap_or("warn");
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.logging.file {
        Some(path) => {
            let (directory, file_name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
    Ok((directory, PathBuf::from(file_name)))
}

async fn open_store(config: &FileConfig) -> Result<Arc<dyn QuestionStore>> {
    let store: Arc<dyn QuestionStore> = match config.store.backend {
        StoreBackend::Memory => {
            debug!("Using in-memory question store");
            if config.store.seed {
                Arc::new(InMemoryQuestionStore::seeded())
            } else {
                Arc::new(InMemoryQuestionStore::new())
            }
        }
        StoreBackend::Json => {
            let path = config.store.resolved_path();
            debug!("Using question store at {}", path.display());
            let store = JsonFileQuestionStore::open(&path, config.store.seed)
                .await
                .with_context(|| format!("Failed to open question store {}", path.display()))?;
            Arc::new(store)
        }
    };
    Ok(store)
}

/// Print a result in the configured format; failures exit with status 1.
fn print_result(result: Result<Reply, ApiError>, config: &FileConfig) -> ExitCode {
    let formatter = formatter_for(config.output.format.unwrap_or_default());
    match result {
        Ok(reply) => {
            print!("{}", ensure_newline(formatter.format_reply(&reply)));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", ensure_newline(formatter.format_error(&error)));
            ExitCode::FAILURE
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
