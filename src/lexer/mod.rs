//! Lexical analysis module for the compiler.
//!
//! This module contains a reference scanner that converts source code into
//! the token slice the parser consumes. It handles:
//!
//! - Tokenization of source code using a regex table with longest-match
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! Literal tokens keep their raw text; `literals` decodes them on demand.

pub mod lexer;
pub mod literals;
pub mod tokens;
