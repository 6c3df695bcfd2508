use crate::Span;

use super::{ast::Item, expressions::Expr, patterns::Pattern, types::Type};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A lone `;`.
    Empty(Span),
    Item(Box<Item>),
    Let(LetStmt),
    Expr(ExprStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Empty(span) => span,
            Stmt::Item(item) => item.get_span(),
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Expr(stmt) => &stmt.span,
        }
    }
}

/// `let pattern: Type = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub pattern: Pattern,
    pub ty: Option<Type>,
    pub value: Option<Expr>,
    pub span: Span,
}

/// An expression in statement position.
///
/// `has_semicolon` is false only for block-like expressions that stand alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub has_semicolon: bool,
    pub span: Span,
}
