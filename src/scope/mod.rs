//! Lexical scope tracking.
//!
//! - scope: arena of chained scopes with shadowing-aware lookup
//! - symbols: the entities a name can refer to

pub mod scope;
pub mod symbols;

#[cfg(test)]
mod tests;
