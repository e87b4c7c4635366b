use crate::config::Color;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Normal,
        Priority::Low,
    ];

    /// Accepts a single-letter code in either case.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Self::Critical),
            "H" => Ok(Self::High),
            "N" => Ok(Self::Normal),
            "L" => Ok(Self::Low),
            _ => Err(AppError::invalid_input(format!(
                "unknown priority '{}'",
                raw.trim()
            ))),
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Critical => 'C',
            Self::High => 'H',
            Self::Normal => 'N',
            Self::Low => 'L',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Critical => Color::Red,
            Self::High => Color::Yellow,
            Self::Normal => Color::Green,
            Self::Low => Color::Blue,
        }
    }

    /// Comma separated codes, as shown in the priority prompt.
    pub fn code_list() -> String {
        Self::ALL
            .iter()
            .map(|priority| priority.code().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
