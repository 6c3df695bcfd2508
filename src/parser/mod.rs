//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a slice of tokens
//! into a [`Crate`](crate::ast::ast::Crate). It uses a Pratt parser for
//! expressions with binding powers for precedence, and recursive descent for:
//!
//! - Items (functions, structs, enums, constants, traits, impls)
//! - Blocks and statements, including block tail values
//! - Conditions, `if`, `match` and loops
//! - Types and patterns
//!
//! The parser is fail-fast: the first error ends the parse.

pub mod control;
pub mod cursor;
pub mod expr;
pub mod item;
pub mod lookups;
pub mod parser;
pub mod pattern;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
