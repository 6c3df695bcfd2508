#![allow(clippy::module_inception)]

//! Front end for a small, expression-oriented systems language.
//!
//! The pipeline is `lexer::lexer::tokenize` (a reference scanner) followed by
//! `parser::parser::parse`, which turns a token slice into an [`ast::ast::Crate`].
//! Name bookkeeping during parsing goes through [`scope::scope::ScopeTable`].

use std::{fmt::Display, rc::Rc};

use crate::{ast::ast::Crate, errors::errors::Error};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

/// A byte offset into a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` up to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str, file: &str) -> Result<Crate, Error> {
    let tokens = lexer::lexer::tokenize(source.to_string(), Some(file.to_string()))?;
    let (_, result) = parser::parser::parse(&tokens, Rc::new(file.to_string()));
    result
}

#[cfg(test)]
mod tests {
    use super::parse_source;

    #[test]
    fn test_parse_source_end_to_end() {
        let krate = parse_source("fn main() { let x = 1; }", "test.lang").unwrap();
        assert_eq!(krate.items.len(), 1);
    }

    #[test]
    fn test_parse_source_reports_lexer_errors() {
        let error = parse_source("fn main() { $ }", "test.lang").unwrap_err();
        assert_eq!(error.get_error_name(), "UnrecognisedToken");
    }
}
