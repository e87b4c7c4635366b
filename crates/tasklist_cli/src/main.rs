use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use tasklist_cli::cli::Cli;
use tasklist_cli::cli::session::run_session;
use tasklist_core::config::{load_config_with_fallback, merge_overrides};
use tasklist_core::error::AppError;
use tasklist_core::prompt::Console;
use tasklist_core::storage::json_store;
use tasklist_core::task_list::TaskList;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid arguments").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tasklist_core=debug,tasklist_cli=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let loaded = load_config_with_fallback();
    if let Some(err) = loaded.error.as_ref() {
        tracing::warn!(error = %err, "using default configuration");
    }
    let overrides = cli.overrides().map_err(AppError::invalid_input)?;
    let config = merge_overrides(&loaded.config, &overrides);
    config.utc_offset()?;

    let path = cli.store.clone().unwrap_or_else(json_store::store_path);
    let mut list = TaskList::new(json_store::load_tasks(&path)?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(&mut list, &config, &mut console)?;

    json_store::save_tasks(&path, list.tasks())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
