//! The read-eval-print loop over task list actions.

use std::io::{BufRead, Write};
use std::str::FromStr;
use tasklist_core::config::Config;
use tasklist_core::error::AppError;
use tasklist_core::prompt::Console;
use tasklist_core::render::TableRenderer;
use tasklist_core::task_list::TaskList;

pub const ACTION_PROMPT: &str = "Input an action (add, print, edit, delete, end):";
pub const INVALID_ACTION: &str = "The input action is invalid";
pub const EXIT_MESSAGE: &str = "Tasklist exiting!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" => Ok(Self::Add),
            "print" => Ok(Self::Print),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            "end" => Ok(Self::End),
            other => Err(AppError::invalid_input(format!("unknown action '{other}'"))),
        }
    }
}

fn print_table<R: BufRead, W: Write>(
    list: &TaskList,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let renderer = TableRenderer::new(config.palette(), config.today()?);
    console.say(renderer.render(list.tasks()).trim_end_matches('\n'))
}

fn run_action<R: BufRead, W: Write>(
    action: Action,
    list: &mut TaskList,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match action {
        Action::Add => {
            list.add_from_console(console)?;
        }
        Action::Print => print_table(list, config, console)?,
        Action::Edit => {
            print_table(list, config, console)?;
            list.edit_task(console)?;
        }
        Action::Delete => {
            print_table(list, config, console)?;
            list.delete_task(console)?;
        }
        Action::End => {}
    }
    Ok(())
}

/// Runs actions until `end` or until input closes. Either way the caller is
/// expected to persist `list` afterwards; an action cut short by closed input
/// leaves the list as it was before that action.
pub fn run_session<R: BufRead, W: Write>(
    list: &mut TaskList,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        let line = match console.ask(ACTION_PROMPT) {
            Ok(line) => line,
            Err(err) if err.is_input_closed() => break,
            Err(err) => return Err(err),
        };

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                tracing::debug!(error = %err, "unknown action");
                console.say(INVALID_ACTION)?;
                continue;
            }
        };

        if action == Action::End {
            break;
        }

        match run_action(action, list, config, console) {
            Ok(()) => {}
            Err(err) if err.is_input_closed() => {
                tracing::debug!(?action, "input closed mid-action");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    console.say(EXIT_MESSAGE)
}
