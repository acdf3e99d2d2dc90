#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{NumericLiteral, Token, TokenKind};

/// A 1-based line and column in the original (unpadded) source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> final.cs
           |
        20 | var a = @;
           | --------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file, position);

    let Some(line_text) = get_source_line(source, position.line) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
