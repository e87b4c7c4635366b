use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("invalid_input - {0}")]
    InvalidInput(String),
    #[error("invalid_data - {0}")]
    InvalidData(String),
    #[error("io_error - {0}")]
    Io(String),
    #[error("input_closed - {0}")]
    InputClosed(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn input_closed() -> Self {
        Self::InputClosed("end of input reached".to_string())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
            Self::InputClosed(_) => "input_closed",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message,
            Self::InvalidData(message) => message,
            Self::Io(message) => message,
            Self::InputClosed(message) => message,
        }
    }

    /// True for the end-of-input condition a console session treats as `end`.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_joins_code_and_message() {
        let err = AppError::invalid_data("bad date in task 2");
        assert_eq!(err.to_string(), "invalid_data - bad date in task 2");
    }

    #[test]
    fn input_closed_is_detectable() {
        assert!(AppError::input_closed().is_input_closed());
        assert!(!AppError::io("disk full").is_input_closed());
        assert_eq!(AppError::input_closed().code(), "input_closed");
    }
}
