use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyInput => "EmptyInput",
            ErrorImpl::InvalidNumberFormat { .. } => "InvalidNumberFormat",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyInput => ErrorTip::None,
            ErrorImpl::InvalidNumberFormat { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one decimal point",
                literal
            )),
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal is never closed, did you miss a closing `{}`?",
                quote
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is never closed with `*/`"))
            }
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("input source cannot be empty")]
    EmptyInput,
    #[error("invalid number format: {literal:?}")]
    InvalidNumberFormat { literal: String },
    #[error("error parsing number: {literal:?}")]
    NumberParseError { literal: String },
    #[error("unterminated string literal opened with {quote:?}")]
    UnterminatedString { quote: char },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unrecognized character: {character:?}")]
    UnrecognizedCharacter { character: char },
}
