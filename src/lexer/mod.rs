//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, types, identifiers, literals, and operators
//! - Doc-comments as tokens, ordinary comments skipped
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
