use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, Month, Time};

/// Calendar date a task is due, canonically `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(Date);

impl DueDate {
    /// Parses `year-month-day`; each part must be an integer and together they
    /// must name a real calendar day.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::invalid_input(format!("invalid date '{}'", raw.trim()));
        let parts: Vec<&str> = raw.trim().split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(self) -> Date {
        self.0
    }

    /// Whole days from `reference` to this date; negative when already past.
    pub fn days_from(self, reference: Date) -> i64 {
        (self.0 - reference).whole_days()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl TryFrom<String> for DueDate {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).map_err(|err| AppError::invalid_data(err.message()))
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

/// Time of day a task is due, canonically `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueTime(Time);

impl DueTime {
    /// Parses `hour:minute` with hour in 0..=23 and minute in 0..=59.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::invalid_input(format!("invalid time '{}'", raw.trim()));
        let parts: Vec<&str> = raw.trim().split(':').collect();
        let [hour, minute] = parts.as_slice() else {
            return Err(invalid());
        };

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl TryFrom<String> for DueTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).map_err(|err| AppError::invalid_data(err.message()))
    }
}

impl From<DueTime> for String {
    fn from(value: DueTime) -> Self {
        value.to_string()
    }
}
