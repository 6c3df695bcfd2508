use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt, types::Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{control::*, expr::*, parser::Parser, stmt::*, types::*};

/// Operator tiers, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    LogicalOr,
    LogicalAnd,
    Comparison,
    BitOr,
    BitXor,
    BitAnd,
    Shift,
    Additive,
    Multiplicative,
    Cast,
    Unary,
    Call,
    Member,
    /// `::`, consumed while parsing a path prefix.
    Path,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;
pub type TypeNUDHandler = fn(&mut Parser<'_>) -> Result<Type, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::StarEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::SlashEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PercentEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::CaretEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::AmpersandEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PipeEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::ShlEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::ShrEquals, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_lazy_boolean_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_lazy_boolean_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_comparison_expr);

    // Bitwise and shifts
    parser.led(TokenKind::Pipe, BindingPower::BitOr, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::BitXor, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::BitAnd, parse_binary_expr);
    parser.led(TokenKind::Shl, BindingPower::Shift, parse_binary_expr);
    parser.led(TokenKind::Shr, BindingPower::Shift, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    parser.led(TokenKind::As, BindingPower::Cast, parse_cast_expr);

    // Postfix
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);
    parser.led(TokenKind::OpenBracket, BindingPower::Call, parse_index_expr);
    parser.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);

    // Literals and paths
    parser.nud(TokenKind::Integer, parse_literal_expr);
    parser.nud(TokenKind::Char, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::True, parse_literal_expr);
    parser.nud(TokenKind::False, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_path_expr);
    parser.nud(TokenKind::SelfValue, parse_path_expr);
    parser.nud(TokenKind::SelfType, parse_path_expr);

    // Prefix operators
    parser.nud(TokenKind::Dash, parse_unary_expr);
    parser.nud(TokenKind::Not, parse_unary_expr);
    parser.nud(TokenKind::Star, parse_deref_expr);
    parser.nud(TokenKind::Ampersand, parse_borrow_expr);
    parser.nud(TokenKind::And, parse_borrow_expr);

    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);
    parser.nud(TokenKind::Underscore, parse_underscore_expr);
    parser.nud(TokenKind::Break, parse_break_expr);
    parser.nud(TokenKind::Continue, parse_continue_expr);
    parser.nud(TokenKind::Return, parse_return_expr);

    // Block-like
    parser.nud(TokenKind::OpenCurly, parse_block_nud);
    parser.nud(TokenKind::Const, parse_const_block_expr);
    parser.nud(TokenKind::If, parse_if_nud);
    parser.nud(TokenKind::Match, parse_match_expr);
    parser.nud(TokenKind::Loop, parse_loop_expr);
    parser.nud(TokenKind::While, parse_while_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::Const, parse_item_stmt);
    parser.stmt(TokenKind::Fn, parse_item_stmt);
    parser.stmt(TokenKind::Struct, parse_item_stmt);
    parser.stmt(TokenKind::Enum, parse_item_stmt);
    parser.stmt(TokenKind::Trait, parse_item_stmt);
    parser.stmt(TokenKind::Impl, parse_item_stmt);
}

pub fn create_token_type_lookups(parser: &mut Parser<'_>) {
    parser.type_nud(TokenKind::Identifier, parse_path_type);
    parser.type_nud(TokenKind::SelfType, parse_path_type);
    parser.type_nud(TokenKind::Ampersand, parse_reference_type);
    parser.type_nud(TokenKind::And, parse_reference_type);
    parser.type_nud(TokenKind::OpenBracket, parse_array_type);
    parser.type_nud(TokenKind::OpenParen, parse_tuple_type);
    parser.type_nud(TokenKind::Not, parse_never_type);
    parser.type_nud(TokenKind::Underscore, parse_inferred_type);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;
