use crate::config::Color;
use crate::error::AppError;
use crate::model::{Description, DueDate, DueTime, Priority};
use crate::prompt::Console;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub priority: Priority,
    pub date: DueDate,
    pub time: DueTime,
    pub description: Description,
}

/// How a due date relates to the reference day. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    Today,
    Upcoming,
}

impl Urgency {
    pub fn code(self) -> char {
        match self {
            Self::Overdue => 'O',
            Self::Today => 'T',
            Self::Upcoming => 'I',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Overdue => Color::Red,
            Self::Today => Color::Yellow,
            Self::Upcoming => Color::Green,
        }
    }
}

/// The task attributes an edit can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Priority,
    Date,
    Time,
    Description,
}

impl TaskField {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "task" | "description" => Ok(Self::Description),
            other => Err(AppError::invalid_input(format!("unknown field '{other}'"))),
        }
    }
}

/// A validated replacement for exactly one task attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Priority(Priority),
    Date(DueDate),
    Time(DueTime),
    Description(Description),
}

impl FieldValue {
    pub fn field(&self) -> TaskField {
        match self {
            Self::Priority(_) => TaskField::Priority,
            Self::Date(_) => TaskField::Date,
            Self::Time(_) => TaskField::Time,
            Self::Description(_) => TaskField::Description,
        }
    }
}

impl Task {
    pub fn new(priority: Priority, date: DueDate, time: DueTime, description: Description) -> Self {
        Self {
            priority,
            date,
            time,
            description,
        }
    }

    /// Prompts for every attribute in turn. The draft may come back with an
    /// empty description, in which case it must not be stored.
    pub fn read_draft<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Self, AppError> {
        let priority = console.read_priority()?;
        let date = console.read_date()?;
        let time = console.read_time()?;
        let description = console.read_description()?;
        Ok(Self::new(priority, date, time, description))
    }

    pub fn is_complete(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn urgency(&self, reference: Date) -> Urgency {
        match self.date.days_from(reference) {
            days if days > 0 => Urgency::Upcoming,
            days if days < 0 => Urgency::Overdue,
            _ => Urgency::Today,
        }
    }

    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Priority(priority) => self.priority = priority,
            FieldValue::Date(date) => self.date = date,
            FieldValue::Time(time) => self.time = time,
            FieldValue::Description(description) => self.description = description,
        }
    }

    /// Replaces the attribute named by `field_name` with a freshly prompted
    /// value. Unknown names are reported and leave the task untouched.
    pub fn edit<R: BufRead, W: Write>(
        &mut self,
        field_name: &str,
        console: &mut Console<R, W>,
    ) -> Result<bool, AppError> {
        let field = match TaskField::parse(field_name) {
            Ok(field) => field,
            Err(err) => {
                tracing::debug!(error = %err, "edit rejected");
                console.say(crate::prompt::INVALID_FIELD)?;
                return Ok(false);
            }
        };

        let value = console.read_field(field)?;
        tracing::debug!(field = ?value.field(), "task field replaced");
        self.apply(value);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, Task, TaskField, Urgency};
    use crate::model::{Description, DueDate, DueTime, Priority};
    use crate::prompt::Console;
    use std::io::Cursor;
    use time::macros::date;

    fn sample_task(date: &str) -> Task {
        Task::new(
            Priority::Normal,
            DueDate::parse(date).unwrap(),
            DueTime::parse("10:00").unwrap(),
            Description::from_lines(["write report"]),
        )
    }

    #[test]
    fn urgency_compares_against_reference_day() {
        let today = date!(2024 - 01 - 10);
        assert_eq!(sample_task("2024-01-15").urgency(today), Urgency::Upcoming);
        assert_eq!(sample_task("2024-01-05").urgency(today), Urgency::Overdue);
        assert_eq!(sample_task("2024-01-10").urgency(today), Urgency::Today);
    }

    #[test]
    fn completeness_follows_description() {
        let mut task = sample_task("2024-01-10");
        assert!(task.is_complete());
        task.description = Description::default();
        assert!(!task.is_complete());
    }

    #[test]
    fn field_names_are_case_insensitive() {
        assert_eq!(TaskField::parse("Priority").unwrap(), TaskField::Priority);
        assert_eq!(TaskField::parse("DATE").unwrap(), TaskField::Date);
        assert_eq!(TaskField::parse("time").unwrap(), TaskField::Time);
        assert_eq!(TaskField::parse("task").unwrap(), TaskField::Description);
        assert_eq!(
            TaskField::parse("description").unwrap(),
            TaskField::Description
        );
        assert!(TaskField::parse("status").is_err());
    }

    #[test]
    fn apply_replaces_a_single_field() {
        let mut task = sample_task("2024-01-10");
        let before = task.clone();
        task.apply(FieldValue::Priority(Priority::Critical));

        assert_eq!(task.priority, Priority::Critical);
        assert_eq!(task.date, before.date);
        assert_eq!(task.time, before.time);
        assert_eq!(task.description, before.description);
    }

    #[test]
    fn edit_reprompts_until_valid_then_commits() {
        let mut task = sample_task("2024-01-10");
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("99:99\n7:5\n"), &mut output);

        assert!(task.edit("time", &mut console).unwrap());
        assert_eq!(task.time.to_string(), "07:05");

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Input the time (hh:mm):").count(), 2);
        assert!(printed.contains("The input time is invalid"));
    }

    #[test]
    fn edit_with_unknown_field_leaves_task_unchanged() {
        let mut task = sample_task("2024-01-10");
        let before = task.clone();
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("C\n"), &mut output);

        assert!(!task.edit("colour", &mut console).unwrap());
        assert_eq!(task, before);
        assert!(String::from_utf8(output).unwrap().contains("Invalid field"));
    }

    #[test]
    fn read_draft_collects_all_fields_in_order() {
        let input = "h\n2024-3-1\n8:00\nfirst line\n  second line  \n\n";
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(input), &mut output);

        let task = Task::read_draft(&mut console).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.date.to_string(), "2024-03-01");
        assert_eq!(task.time.to_string(), "08:00");
        assert_eq!(task.description.lines(), ["first line", "second line"]);
    }

    #[test]
    fn serializes_with_named_canonical_fields() {
        let task = sample_task("2024-01-10");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "priority": "N",
                "date": "2024-01-10",
                "time": "10:00",
                "description": ["write report"]
            })
        );
    }
}
