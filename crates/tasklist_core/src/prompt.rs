//! Line-based console prompting.
//!
//! Every single-line field goes through [`Console::prompt_until`]: print the
//! prompt, read a line, and on a parse failure print the field's warning and
//! the prompt again. There is no retry cap; the loop only ends on valid input
//! or when the input stream closes.

use crate::error::AppError;
use crate::model::{Description, DueDate, DueTime, FieldValue, Priority, TaskField};
use std::io::{BufRead, Write};

pub const PRIORITY_WARNING: &str = "The input priority is invalid";
pub const DATE_PROMPT: &str = "Input the date (yyyy-mm-dd):";
pub const DATE_WARNING: &str = "The input date is invalid";
pub const TIME_PROMPT: &str = "Input the time (hh:mm):";
pub const TIME_WARNING: &str = "The input time is invalid";
pub const DESCRIPTION_PROMPT: &str = "Input a new task (enter a blank line to end):";
pub const DESCRIPTION_WARNING: &str = "The task is blank";
pub const INDEX_WARNING: &str = "Invalid task number";
pub const FIELD_PROMPT: &str = "Input a field to edit (priority, date, time, task):";
pub const INVALID_FIELD: &str = "Invalid field";

pub fn priority_prompt() -> String {
    format!("Input the task priority ({}):", Priority::code_list())
}

/// Resolves a 1-based task number typed by the user to a 0-based index.
pub fn valid_index(raw: &str, count: usize) -> Result<usize, AppError> {
    let number: usize = raw
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{}' is not a number", raw.trim())))?;
    if number == 0 || number > count {
        return Err(AppError::invalid_input(format!(
            "task number {number} is outside 1-{count}"
        )));
    }
    Ok(number - 1)
}

pub struct Console<R, W> {
    input: R,
    output: W,
    buffer: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buffer: Vec::new(),
        }
    }

    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator. Bytes that are not UTF-8 are
    /// replaced, so such a line reaches the field parser like any other typo.
    pub fn read_line(&mut self) -> Result<String, AppError> {
        self.buffer.clear();
        let bytes = self.input.read_until(b'\n', &mut self.buffer)?;
        if bytes == 0 {
            return Err(AppError::input_closed());
        }
        Ok(String::from_utf8_lossy(&self.buffer)
            .trim_end_matches(['\n', '\r'])
            .to_string())
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.say(prompt)?;
        self.read_line()
    }

    pub fn prompt_until<T, F>(&mut self, prompt: &str, warning: &str, parse: F) -> Result<T, AppError>
    where
        F: Fn(&str) -> Result<T, AppError>,
    {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(error = %err, "rejected console input");
                    self.say(warning)?;
                    self.say(prompt)?;
                }
            }
        }
    }

    pub fn read_priority(&mut self) -> Result<Priority, AppError> {
        self.prompt_until(&priority_prompt(), PRIORITY_WARNING, Priority::parse)
    }

    pub fn read_date(&mut self) -> Result<DueDate, AppError> {
        self.prompt_until(DATE_PROMPT, DATE_WARNING, DueDate::parse)
    }

    pub fn read_time(&mut self) -> Result<DueTime, AppError> {
        self.prompt_until(TIME_PROMPT, TIME_WARNING, DueTime::parse)
    }

    /// Collects lines until a blank one. A blank first line yields an empty
    /// description after printing the blank-task notice.
    pub fn read_description(&mut self) -> Result<Description, AppError> {
        self.say(DESCRIPTION_PROMPT)?;
        let mut description = Description::default();
        while description.push_line(&self.read_line()?) {}
        if description.is_empty() {
            self.say(DESCRIPTION_WARNING)?;
        }
        Ok(description)
    }

    /// Like [`Console::read_description`] but keeps asking until at least one
    /// line is entered.
    pub fn read_required_description(&mut self) -> Result<Description, AppError> {
        loop {
            let description = self.read_description()?;
            if !description.is_empty() {
                return Ok(description);
            }
        }
    }

    pub fn read_field(&mut self, field: TaskField) -> Result<FieldValue, AppError> {
        Ok(match field {
            TaskField::Priority => FieldValue::Priority(self.read_priority()?),
            TaskField::Date => FieldValue::Date(self.read_date()?),
            TaskField::Time => FieldValue::Time(self.read_time()?),
            TaskField::Description => FieldValue::Description(self.read_required_description()?),
        })
    }

    pub fn read_index(&mut self, count: usize) -> Result<usize, AppError> {
        let prompt = format!("Input the task number (1-{count}):");
        self.prompt_until(&prompt, INDEX_WARNING, |raw| valid_index(raw, count))
    }
}
