use crate::{
    ast::{
        expressions::{BlockExpr, ConstBlockExpr, Expr, ExprWithBlock},
        statements::{ExprStmt, LetStmt, Stmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    scope::symbols::Symbol,
};

use super::{
    expr::{parse_expr, parse_led, parse_nud},
    item::parse_item,
    lookups::BindingPower,
    parser::Parser,
    pattern::{bind_pattern, parse_pattern},
    types::parse_type,
};

/// Whether the current token opens a statement rather than an expression.
///
/// `const` is an item in `const fn` and `const NAME`, and an expression in
/// `const { .. }`.
pub fn starts_statement(parser: &Parser<'_>) -> bool {
    match parser.current_token_kind() {
        TokenKind::Const => matches!(
            parser.peek_kind(1),
            TokenKind::Fn | TokenKind::Identifier | TokenKind::Underscore
        ),
        kind => parser.get_stmt_lookup().contains_key(&kind),
    }
}

/// Whether the current token starts an expression ending in a block.
pub fn starts_block_like(parser: &Parser<'_>) -> bool {
    match parser.current_token() {
        Ok(token) if token.kind == TokenKind::Const => {
            parser.peek_kind(1) == TokenKind::OpenCurly
        }
        Ok(token) => token.is_one_of_many(&[
            TokenKind::OpenCurly,
            TokenKind::If,
            TokenKind::Match,
            TokenKind::Loop,
            TokenKind::While,
        ]),
        Err(_) => false,
    }
}

/// Parses an expression in statement position.
///
/// A block-like expression here ends at its closing brace; only a `.`
/// continues it, so `if c {} - 1` is two statements.
pub fn parse_statement_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    if !starts_block_like(parser) {
        return parse_expr(parser, BindingPower::Default);
    }

    parser.enter_nesting()?;
    let result = parse_nud(parser).and_then(|expr| {
        if parser.current_token_kind() == TokenKind::Dot {
            parse_led(parser, expr, BindingPower::Default)
        } else {
            Ok(expr)
        }
    });
    parser.leave_nesting();
    result
}

pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();
    let handler = match parser.get_stmt_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected("a statement")),
    };

    handler(parser)
}

/// `{ statements }`, in its own scope.
///
/// Each element is a statement, an expression followed by `;`, or a
/// block-like expression standing alone. A final expression without `;`
/// is the block's value.
pub fn parse_block_expr(parser: &mut Parser<'_>) -> Result<BlockExpr, Error> {
    parser.enter_nesting()?;
    let result = parser.scoped(|parser| parser.with_struct_literals(true, parse_block_body));
    parser.leave_nesting();
    result
}

fn parse_block_body(parser: &mut Parser<'_>) -> Result<BlockExpr, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;
    let mut statements = vec![];
    let mut tail = None;

    while parser.current_token_kind() != TokenKind::CloseCurly {
        parser.enter_nesting()?;
        let result = parse_block_element(parser, &mut statements, &mut tail);
        parser.leave_nesting();
        result?;
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockExpr {
        statements,
        tail,
        span: parser.span_from(&open.span),
    })
}

/// One statement, or the tail expression when `}` follows it.
fn parse_block_element(
    parser: &mut Parser<'_>,
    statements: &mut Vec<Stmt>,
    tail: &mut Option<Box<Expr>>,
) -> Result<(), Error> {
    if starts_statement(parser) {
        statements.push(parse_stmt(parser)?);
        return Ok(());
    }

    let expr = parse_statement_expr(parser)?;
    if parser.eat(TokenKind::Semicolon) {
        statements.push(Stmt::Expr(ExprStmt {
            span: parser.span_from(expr.get_span()),
            expr,
            has_semicolon: true,
        }));
    } else if parser.current_token_kind() == TokenKind::CloseCurly {
        *tail = Some(Box::new(expr));
    } else if expr.is_with_block() {
        statements.push(Stmt::Expr(ExprStmt {
            span: expr.get_span().clone(),
            expr,
            has_semicolon: false,
        }));
    } else {
        return Err(parser.unexpected(&TokenKind::Semicolon.describe()));
    }
    Ok(())
}

pub fn parse_block_nud(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    Ok(ExprWithBlock::Block(parse_block_expr(parser)?).into())
}

/// `const { .. }`
pub fn parse_const_block_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::Const)?;
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Err(parser.unexpected(&TokenKind::OpenCurly.describe()));
    }
    let block = parse_block_expr(parser)?;

    Ok(ExprWithBlock::ConstBlock(ConstBlockExpr {
        block,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

/// `let pattern: Type = value;`
///
/// The bindings come into scope after the initializer, so `let x = x;`
/// reads the outer `x`.
pub fn parse_let_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let keyword = parser.expect(TokenKind::Let)?;
    let pattern = parse_pattern(parser)?;

    let ty = if parser.eat(TokenKind::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let value = if parser.eat(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;
    bind_pattern(parser, &pattern, ty.as_ref());

    Ok(Stmt::Let(LetStmt {
        pattern,
        ty,
        value,
        span: parser.span_from(&keyword.span),
    }))
}

pub fn parse_empty_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let semicolon = parser.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Empty(semicolon.span.clone()))
}

/// An item declared inside a block, visible from then on in that block.
pub fn parse_item_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let item = parse_item(parser)?;
    parser.declare(Symbol::from_item(&item), &item.get_span().start);
    Ok(Stmt::Item(Box::new(item)))
}
