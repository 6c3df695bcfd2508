//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and recursive descent for statements, items, types
//! and patterns.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, rc::Rc};

use log::{debug, info};

use crate::{
    ast::ast::Crate,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    scope::{scope::ScopeTable, symbols::Symbol},
    Position, Span,
};

use super::{
    cursor::TokenCursor,
    item::parse_item,
    lookups::{
        create_token_lookups, create_token_type_lookups, BPLookup, BindingPower, LEDHandler,
        LEDLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup, TypeNUDHandler, TypeNUDLookup,
    },
};

/// Knobs for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of expressions, blocks, types and patterns.
    pub max_depth: usize,
    /// Consult the scope table to tell constants from fresh bindings in patterns.
    pub resolve_patterns: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 256,
            resolve_patterns: true,
        }
    }
}

/// A name declared twice in the same scope. Reported, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Redefinition {
    pub name: String,
    pub position: Position,
}

/// The main parser structure that maintains parsing state.
///
/// The token slice is borrowed from the caller and never mutated; the
/// cursor position, the scope table and the restriction flags are the
/// parser's own state.
pub struct Parser<'t> {
    tokens: TokenCursor<'t>,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    type_nud_lookup: TypeNUDLookup,
    scopes: ScopeTable,
    redefinitions: Vec<Redefinition>,
    options: ParseOptions,
    depth: usize,
    /// Set while parsing a condition or scrutinee, where `{` opens the body.
    no_struct_literal: bool,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], file: Rc<String>, options: ParseOptions) -> Self {
        Parser {
            tokens: TokenCursor::new(tokens, file),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            scopes: ScopeTable::new(),
            redefinitions: vec![],
            options,
            depth: 0,
            no_struct_literal: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Result<&'t Token, Error> {
        self.tokens.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.kind()
    }

    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens.kind_ahead(offset)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<&'t Token, Error> {
        self.tokens.consume()
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.tokens.eat(kind)
    }

    /// Expects a token of the specified kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'t Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(&expected_kind.describe()));
        }
        self.advance()
    }

    /// Expects one of `kinds`, reporting `expected` otherwise.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind], expected: &str) -> Result<&'t Token, Error> {
        match self.current_token() {
            Ok(token) if token.is_one_of_many(kinds) => self.advance(),
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Error for the current token not being `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        match self.current_token() {
            Ok(token) if token.kind != TokenKind::EOF => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.to_string(),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ),
            _ => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected.to_string(),
                },
                self.get_position(),
            ),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.tokens.position()
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: &Span) -> Span {
        match self.tokens.previous() {
            Some(token) => start.to(&token.span),
            None => start.clone(),
        }
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Leaves the binding power table alone: `-` and `&` have both roles.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type handler for a token.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Counts one more level of nesting, failing past `max_depth`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn struct_literal_allowed(&self) -> bool {
        !self.no_struct_literal
    }

    /// Runs `parse` with struct literals allowed or not, restoring the
    /// previous setting afterwards.
    pub fn with_struct_literals<T>(
        &mut self,
        allowed: bool,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let saved = self.no_struct_literal;
        self.no_struct_literal = !allowed;
        let result = parse(self);
        self.no_struct_literal = saved;
        result
    }

    pub fn scopes(&self) -> &ScopeTable {
        &self.scopes
    }

    pub fn push_scope(&mut self) {
        self.scopes.push_scope();
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop_scope();
    }

    /// Runs `parse` inside a fresh scope, which is popped whatever the outcome.
    pub fn scoped<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.push_scope();
        let result = parse(self);
        self.pop_scope();
        result
    }

    /// Declares `symbol` in the innermost scope, recording a collision.
    pub fn declare(&mut self, symbol: Symbol, position: &Position) {
        let name = symbol.key();
        if !self.scopes.define(&name, symbol) {
            debug!("`{}` is already defined in this scope ({})", name, position);
            self.redefinitions.push(Redefinition {
                name,
                position: position.clone(),
            });
        }
    }

    /// Binds a `let` or pattern variable, replacing one of the same name.
    pub fn bind(&mut self, symbol: Symbol) {
        let name = symbol.key();
        self.scopes.shadow(&name, symbol);
    }

    /// Names declared twice in one scope, in the order they were found.
    pub fn redefinitions(&self) -> &[Redefinition] {
        &self.redefinitions
    }
}

/// Parses a stream of tokens into a syntax tree with default options.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the `Crate` or the first Error
pub fn parse(tokens: &[Token], file: Rc<String>) -> (Parser<'_>, Result<Crate, Error>) {
    parse_with_options(tokens, file, ParseOptions::default())
}

pub fn parse_with_options(
    tokens: &[Token],
    file: Rc<String>,
    options: ParseOptions,
) -> (Parser<'_>, Result<Crate, Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file), options);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);
    info!("parsing {} tokens from {}", tokens.len(), file);

    let result = parse_crate(&mut parser, file);
    if let Ok(krate) = &result {
        info!(
            "parsed {} items, {} redefinitions",
            krate.items.len(),
            parser.redefinitions.len()
        );
    }

    (parser, result)
}

fn parse_crate(parser: &mut Parser<'_>, file: Rc<String>) -> Result<Crate, Error> {
    let start = Position(0, file);
    let mut items = vec![];

    while parser.has_tokens() {
        let item = parse_item(parser)?;
        parser.declare(Symbol::from_item(&item), &item.get_span().start);
        items.push(item);
    }

    let end = parser.get_position();
    Ok(Crate {
        items,
        span: Span { start, end },
    })
}
