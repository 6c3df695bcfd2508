use crate::{lexer::tokens::Token, Span};

use super::{ast::Path, expressions::LiteralExpr};

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Literal(LiteralPattern),
    Identifier(IdentifierPattern),
    Wildcard(Token),
    Reference(ReferencePattern),
    Path(Path),
    /// `Some(x)`, `Color::Rgb(r, g, b)`
    TupleStruct(TupleStructPattern),
}

impl Pattern {
    pub fn get_span(&self) -> &Span {
        match self {
            Pattern::Literal(pattern) => &pattern.span,
            Pattern::Identifier(pattern) => &pattern.span,
            Pattern::Wildcard(token) => &token.span,
            Pattern::Reference(pattern) => &pattern.span,
            Pattern::Path(path) => &path.span,
            Pattern::TupleStruct(pattern) => &pattern.span,
        }
    }

    /// Bindings this pattern introduces, outermost first.
    pub fn bindings(&self) -> Vec<&IdentifierPattern> {
        match self {
            Pattern::Identifier(pattern) => {
                let mut bindings = vec![pattern];
                if let Some(subpattern) = &pattern.subpattern {
                    bindings.extend(subpattern.bindings());
                }
                bindings
            }
            Pattern::Reference(pattern) => pattern.inner.bindings(),
            Pattern::TupleStruct(pattern) => pattern
                .elements
                .iter()
                .flat_map(|element| element.bindings())
                .collect(),
            Pattern::Literal(_) | Pattern::Wildcard(_) | Pattern::Path(_) => vec![],
        }
    }
}

/// A literal, optionally negated: `1`, `-1`, `'a'`, `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralPattern {
    pub literal: LiteralExpr,
    pub negated: bool,
    pub span: Span,
}

/// `ref mut name @ subpattern`, every part but the name optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierPattern {
    pub name: Token,
    pub is_ref: bool,
    pub is_mut: bool,
    pub subpattern: Option<Box<Pattern>>,
    pub span: Span,
}

/// `&pattern` or `&mut pattern`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePattern {
    pub mutable: bool,
    pub inner: Box<Pattern>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleStructPattern {
    pub path: Path,
    pub elements: Vec<Pattern>,
    pub span: Span,
}
