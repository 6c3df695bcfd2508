use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{expressions::BlockExpr, expressions::Expr, types::Type};

/// Root of the syntax tree: the items of one compilation unit, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Crate {
    pub items: Vec<Item>,
    pub span: Span,
}

/// A `::`-separated name such as `Color::Red` or `self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub segments: Vec<Token>,
    pub span: Span,
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| segment.value.as_str())
            .collect();
        write!(f, "{}", names.join("::"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(FunctionItem),
    Struct(StructItem),
    Enum(EnumItem),
    Constant(ConstantItem),
    Trait(TraitItem),
    Impl(ImplItem),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Function(item) => &item.span,
            Item::Struct(item) => &item.span,
            Item::Enum(item) => &item.span,
            Item::Constant(item) => &item.span,
            Item::Trait(item) => &item.span,
            Item::Impl(item) => &item.span,
        }
    }

    /// The declared name, if the item has one. Impls are anonymous.
    pub fn name(&self) -> Option<&Token> {
        match self {
            Item::Function(item) => Some(&item.name),
            Item::Struct(item) => Some(&item.name),
            Item::Enum(item) => Some(&item.name),
            Item::Constant(item) => Some(&item.name),
            Item::Trait(item) => Some(&item.name),
            Item::Impl(_) => None,
        }
    }
}

/// Function declaration. A missing `body` means a signature-only declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionItem {
    pub is_const: bool,
    pub name: Token,
    pub self_param: Option<SelfParam>,
    pub params: Vec<FunctionParam>,
    pub return_type: Option<Type>,
    pub body: Option<BlockExpr>,
    pub span: Span,
}

/// `self`, `mut self`, `&self`, `&mut self` or `self: Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfParam {
    pub is_ref: bool,
    pub is_mut: bool,
    pub explicit_type: Option<Type>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    pub name: Token,
    pub ty: Type,
    pub span: Span,
}

/// Struct declaration. `fields` is `None` for a unit struct (`struct Unit;`).
#[derive(Debug, Clone, PartialEq)]
pub struct StructItem {
    pub name: Token,
    pub fields: Option<Vec<StructField>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: Token,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumItem {
    pub name: Token,
    pub variants: Vec<Token>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantItem {
    pub name: Token,
    pub ty: Type,
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitItem {
    pub name: Token,
    pub items: Vec<AssociatedItem>,
    pub span: Span,
}

/// `impl Type { .. }` or `impl Trait for Type { .. }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplItem {
    pub trait_name: Option<Token>,
    pub target: Type,
    pub items: Vec<AssociatedItem>,
    pub span: Span,
}

/// Items allowed inside trait and impl bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum AssociatedItem {
    Constant(ConstantItem),
    Function(FunctionItem),
}

impl AssociatedItem {
    pub fn name(&self) -> &Token {
        match self {
            AssociatedItem::Constant(item) => &item.name,
            AssociatedItem::Function(item) => &item.name,
        }
    }
}
