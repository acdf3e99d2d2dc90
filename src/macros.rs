//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a source position
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance with no numeric payload.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - Anything convertible into the token's lexeme `String`
/// * `$position` - The `Position` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Semicolon, ";", Position::new(1, 11));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: String::from($lexeme),
            line: $position.line,
            column: $position.column,
            literal: None,
        }
    };
}
