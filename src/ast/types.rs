use crate::{lexer::tokens::Token, Span};

use super::{ast::Path, expressions::Expr};

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Path(PathType),
    Reference(ReferenceType),
    Array(ArrayType),
    Slice(SliceType),
    /// `()` or `(A, B, ..)`. A parenthesized single type is not a tuple.
    Tuple(TupleType),
    /// `!`
    Never(Token),
    /// `_`
    Inferred(Token),
}

impl Type {
    pub fn get_span(&self) -> &Span {
        match self {
            Type::Path(ty) => &ty.path.span,
            Type::Reference(ty) => &ty.span,
            Type::Array(ty) => &ty.span,
            Type::Slice(ty) => &ty.span,
            Type::Tuple(ty) => &ty.span,
            Type::Never(token) | Type::Inferred(token) => &token.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathType {
    pub path: Path,
}

/// `&T` or `&mut T`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceType {
    pub mutable: bool,
    pub target: Box<Type>,
    pub span: Span,
}

/// `[T; N]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element: Box<Type>,
    pub length: Box<Expr>,
    pub span: Span,
}

/// `[T]`
#[derive(Debug, Clone, PartialEq)]
pub struct SliceType {
    pub element: Box<Type>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleType {
    pub elements: Vec<Type>,
    pub span: Span,
}
