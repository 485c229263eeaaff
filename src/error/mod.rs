//! Error types for the negation gacha.

use thiserror::Error;

pub type GachaResult<T> = Result<T, GachaError>;

#[derive(Error, Debug)]
pub enum GachaError {
    /// The input is blank or no tokenizer was supplied.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Something broke while converting, e.g. the tokenizer failed.
    #[error("failed to parse negative: {message}")]
    Runtime {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No rule matched, the result text is the same as the input text.
    #[error("result text is the same as input text")]
    ConversionFailed,
}

/// Fieldless mirror of [`GachaError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Runtime,
    ConversionFailed,
}

impl GachaError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GachaError::InvalidInput(message.into())
    }

    pub fn runtime(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        GachaError::Runtime {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GachaError::InvalidInput(_) => ErrorKind::InvalidInput,
            GachaError::Runtime { .. } => ErrorKind::Runtime,
            GachaError::ConversionFailed => ErrorKind::ConversionFailed,
        }
    }
}
