//! Positional read-only view over a token slice.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Cursor over tokens owned by the caller. The position is its only state.
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    file: Rc<String>,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token], file: Rc<String>) -> Self {
        TokenCursor {
            tokens,
            pos: 0,
            file,
        }
    }

    /// The current token.
    pub fn peek(&self) -> Result<&'t Token, Error> {
        self.peek_ahead(0)
    }

    /// The token `offset` places past the current one.
    pub fn peek_ahead(&self, offset: usize) -> Result<&'t Token, Error> {
        self.tokens.get(self.pos + offset).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("a token"),
                },
                self.position(),
            )
        })
    }

    /// Returns the current token and moves past it.
    pub fn consume(&mut self) -> Result<&'t Token, Error> {
        let token = self.peek()?;
        self.pos += 1;
        Ok(token)
    }

    /// Moves past the current token only if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.kind() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Moves past the current token only if both its kind and text match.
    pub fn eat_value(&mut self, kind: TokenKind, value: &str) -> bool {
        match self.peek() {
            Ok(token) if token.kind == kind && token.value == value => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Kind of the current token; `EOF` once the slice is exhausted.
    pub fn kind(&self) -> TokenKind {
        self.kind_ahead(0)
    }

    pub fn kind_ahead(&self, offset: usize) -> TokenKind {
        self.peek_ahead(offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&'t Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Where the current token starts, or where the input ends.
    pub fn position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}
