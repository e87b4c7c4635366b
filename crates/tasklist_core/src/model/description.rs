use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Free-text task body, one entry per entered line.
///
/// Lines are stored trimmed and blank lines are never kept. An empty
/// description is representable so that an abandoned draft can be detected,
/// but a stored task always carries at least one line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Description {
    lines: Vec<String>,
}

impl Description {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends one entered line; returns false for a blank line, which ends input.
    pub fn push_line(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.lines.push(trimmed.to_string());
        true
    }
}

impl TryFrom<Vec<String>> for Description {
    type Error = AppError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        let description = Self::from_lines(value);
        if description.is_empty() {
            return Err(AppError::invalid_data("task description is blank"));
        }
        Ok(description)
    }
}

impl From<Description> for Vec<String> {
    fn from(value: Description) -> Self {
        value.lines
    }
}
