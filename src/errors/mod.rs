//! Error types and error handling for the lexer.
//!
//! This module defines the errors a lexer can report. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for construction and per-token failures
//! - Helpful error messages and suggestions

pub mod errors;
