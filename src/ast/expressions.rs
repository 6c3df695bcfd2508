use crate::{
    errors::errors::DecodeError,
    lexer::{
        literals::{decode_char, decode_integer, decode_string},
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::{ast::Path, patterns::Pattern, statements::Stmt, types::Type};

/// Expressions, split by whether their outer syntax ends in a block.
///
/// The split decides whether a trailing `;` is required in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    WithBlock(ExprWithBlock),
    WithoutBlock(ExprWithoutBlock),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::WithBlock(expr) => expr.get_span(),
            Expr::WithoutBlock(expr) => expr.get_span(),
        }
    }

    pub fn is_with_block(&self) -> bool {
        matches!(self, Expr::WithBlock(_))
    }
}

impl From<ExprWithBlock> for Expr {
    fn from(expr: ExprWithBlock) -> Self {
        Expr::WithBlock(expr)
    }
}

impl From<ExprWithoutBlock> for Expr {
    fn from(expr: ExprWithoutBlock) -> Self {
        Expr::WithoutBlock(expr)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprWithBlock {
    Block(BlockExpr),
    ConstBlock(ConstBlockExpr),
    If(IfExpr),
    Match(MatchExpr),
    Loop(LoopExpr),
    While(WhileExpr),
}

impl ExprWithBlock {
    pub fn get_span(&self) -> &Span {
        match self {
            ExprWithBlock::Block(expr) => &expr.span,
            ExprWithBlock::ConstBlock(expr) => &expr.span,
            ExprWithBlock::If(expr) => &expr.span,
            ExprWithBlock::Match(expr) => &expr.span,
            ExprWithBlock::Loop(expr) => &expr.span,
            ExprWithBlock::While(expr) => &expr.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprWithoutBlock {
    Literal(LiteralExpr),
    Path(PathExpr),
    Unary(UnaryExpr),
    Borrow(BorrowExpr),
    Deref(DerefExpr),
    Binary(BinaryExpr),
    Comparison(BinaryExpr),
    LazyBoolean(BinaryExpr),
    Cast(CastExpr),
    Assignment(AssignmentExpr),
    CompoundAssignment(CompoundAssignmentExpr),
    Grouped(GroupedExpr),
    Array(ArrayExpr),
    ArrayRepeat(ArrayRepeatExpr),
    Index(IndexExpr),
    StructLiteral(StructLiteralExpr),
    Call(CallExpr),
    MethodCall(MethodCallExpr),
    Field(FieldExpr),
    Break(BreakExpr),
    Continue(Token),
    Return(ReturnExpr),
    Underscore(Token),
}

impl ExprWithoutBlock {
    pub fn get_span(&self) -> &Span {
        match self {
            ExprWithoutBlock::Literal(expr) => &expr.token.span,
            ExprWithoutBlock::Path(expr) => &expr.path.span,
            ExprWithoutBlock::Unary(expr) => &expr.span,
            ExprWithoutBlock::Borrow(expr) => &expr.span,
            ExprWithoutBlock::Deref(expr) => &expr.span,
            ExprWithoutBlock::Binary(expr)
            | ExprWithoutBlock::Comparison(expr)
            | ExprWithoutBlock::LazyBoolean(expr) => &expr.span,
            ExprWithoutBlock::Cast(expr) => &expr.span,
            ExprWithoutBlock::Assignment(expr) => &expr.span,
            ExprWithoutBlock::CompoundAssignment(expr) => &expr.span,
            ExprWithoutBlock::Grouped(expr) => &expr.span,
            ExprWithoutBlock::Array(expr) => &expr.span,
            ExprWithoutBlock::ArrayRepeat(expr) => &expr.span,
            ExprWithoutBlock::Index(expr) => &expr.span,
            ExprWithoutBlock::StructLiteral(expr) => &expr.span,
            ExprWithoutBlock::Call(expr) => &expr.span,
            ExprWithoutBlock::MethodCall(expr) => &expr.span,
            ExprWithoutBlock::Field(expr) => &expr.span,
            ExprWithoutBlock::Break(expr) => &expr.span,
            ExprWithoutBlock::Continue(token) | ExprWithoutBlock::Underscore(token) => {
                &token.span
            }
            ExprWithoutBlock::Return(expr) => &expr.span,
        }
    }
}

// LITERALS

/// A literal token: integer, char, string, `true` or `false`.
///
/// The token keeps its raw text; `decode` turns it into a value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    Integer(u128),
    Char(char),
    String(String),
    Bool(bool),
}

impl LiteralExpr {
    pub fn decode(&self) -> Result<LiteralValue, DecodeError> {
        let raw = self.token.value.as_str();
        match self.token.kind {
            TokenKind::Integer => decode_integer(raw).map(LiteralValue::Integer),
            TokenKind::Char => decode_char(raw).map(LiteralValue::Char),
            TokenKind::String => decode_string(raw).map(LiteralValue::String),
            TokenKind::True => Ok(LiteralValue::Bool(true)),
            TokenKind::False => Ok(LiteralValue::Bool(false)),
            _ => Err(DecodeError::MalformedLiteral {
                literal: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathExpr {
    pub path: Path,
}

// OPERATORS

/// `-operand` or `!operand`, told apart by `operator`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// `&operand` or `&mut operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowExpr {
    pub mutable: bool,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerefExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Shared shape of arithmetic, bitwise, comparison and lazy boolean operators.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub operand: Box<Expr>,
    pub target: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}

/// `assignee op= value`; `operator` is the full compound token, e.g. `+=`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// `[value; length]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayRepeatExpr {
    pub value: Box<Expr>,
    pub length: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructLiteralExpr {
    pub path: Path,
    pub fields: Vec<StructLiteralField>,
    pub span: Span,
}

/// `name: value`, or the shorthand `name` whose value is the variable `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructLiteralField {
    pub name: Token,
    pub value: Expr,
    pub is_shorthand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpr {
    pub receiver: Box<Expr>,
    pub method: Token,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// `base.field`, where `field` is a name or a tuple index.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub base: Box<Expr>,
    pub field: Token,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakExpr {
    pub value: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnExpr {
    pub value: Option<Box<Expr>>,
    pub span: Span,
}

// BLOCK-LIKE

/// `{ statements; tail }`. Without a tail the block has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub statements: Vec<Stmt>,
    pub tail: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstBlockExpr {
    pub block: BlockExpr,
    pub span: Span,
}

/// The condition of an `if` or `while`.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Expr(Box<Expr>),
    /// `let p = e && cond && let q = f ..`, never empty.
    LetChain(Vec<LetChainLink>),
}

/// One link of a let-chain. `pattern` is `None` for a plain boolean link.
#[derive(Debug, Clone, PartialEq)]
pub struct LetChainLink {
    pub pattern: Option<Pattern>,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Condition,
    pub then_branch: BlockExpr,
    pub else_branch: Option<ElseBranch>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    If(Box<IfExpr>),
    Block(BlockExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchExpr {
    pub scrutinee: Box<Expr>,
    pub arms: Vec<MatchArm>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopExpr {
    pub body: BlockExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub condition: Condition,
    pub body: BlockExpr,
    pub span: Span,
}
