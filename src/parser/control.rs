//! Conditions and control-flow expressions: `if`, `while`, `loop`, `match`.

use crate::{
    ast::expressions::{
        Condition, ElseBranch, Expr, ExprWithBlock, IfExpr, LetChainLink, LoopExpr, MatchArm,
        MatchExpr, WhileExpr,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::Parser,
    pattern::{bind_pattern, parse_pattern},
    stmt::{parse_block_expr, parse_statement_expr},
};

/// The condition of an `if` or `while`, with struct literals excluded.
///
/// A condition starting with `let` is a let-chain. Its links are parsed
/// above the `&&` tier, so `&&` separates links while `||` and
/// assignments cannot appear at the top of a link.
pub fn parse_condition(parser: &mut Parser<'_>) -> Result<Condition, Error> {
    parser.with_struct_literals(false, |parser| {
        if parser.current_token_kind() != TokenKind::Let {
            let expr = parse_expr(parser, BindingPower::Default)?;
            return Ok(Condition::Expr(Box::new(expr)));
        }

        let mut links = vec![parse_let_chain_link(parser)?];
        while parser.eat(TokenKind::And) {
            links.push(parse_let_chain_link(parser)?);
        }

        Ok(Condition::LetChain(links))
    })
}

fn parse_let_chain_link(parser: &mut Parser<'_>) -> Result<LetChainLink, Error> {
    let start = parser.current_token()?.span.clone();

    if !parser.eat(TokenKind::Let) {
        let value = parse_expr(parser, BindingPower::LogicalAnd)?;
        return Ok(LetChainLink {
            pattern: None,
            value,
            span: parser.span_from(&start),
        });
    }

    let pattern = parse_pattern(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::LogicalAnd)?;
    bind_pattern(parser, &pattern, None);

    Ok(LetChainLink {
        pattern: Some(pattern),
        value,
        span: parser.span_from(&start),
    })
}

/// `if cond { .. } else if cond { .. } else { .. }`
///
/// Let-chain bindings are visible in the then-branch only.
pub fn parse_if_expr(parser: &mut Parser<'_>) -> Result<IfExpr, Error> {
    let keyword = parser.expect(TokenKind::If)?;

    let (condition, then_branch) = parser.scoped(|parser| {
        let condition = parse_condition(parser)?;
        let then_branch = parse_block_expr(parser)?;
        Ok((condition, then_branch))
    })?;

    let else_branch = if !parser.eat(TokenKind::Else) {
        None
    } else if parser.current_token_kind() == TokenKind::If {
        parser.enter_nesting()?;
        let else_if = parse_if_expr(parser);
        parser.leave_nesting();
        Some(ElseBranch::If(Box::new(else_if?)))
    } else {
        Some(ElseBranch::Block(parse_block_expr(parser)?))
    };

    Ok(IfExpr {
        condition,
        then_branch,
        else_branch,
        span: parser.span_from(&keyword.span),
    })
}

pub fn parse_if_nud(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    Ok(ExprWithBlock::If(parse_if_expr(parser)?).into())
}

pub fn parse_while_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::While)?;

    let (condition, body) = parser.scoped(|parser| {
        let condition = parse_condition(parser)?;
        let body = parse_block_expr(parser)?;
        Ok((condition, body))
    })?;

    Ok(ExprWithBlock::While(WhileExpr {
        condition,
        body,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

pub fn parse_loop_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::Loop)?;
    let body = parse_block_expr(parser)?;

    Ok(ExprWithBlock::Loop(LoopExpr {
        body,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

/// `match scrutinee { pattern if guard => body, .. }`
///
/// An arm needs a trailing comma unless its body is block-like or it is
/// the last arm.
pub fn parse_match_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::Match)?;
    let scrutinee = parser.with_struct_literals(false, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;
    parser.expect(TokenKind::OpenCurly)?;

    let arms = parser.with_struct_literals(true, |parser| {
        let mut arms = vec![];
        while parser.current_token_kind() != TokenKind::CloseCurly {
            parser.enter_nesting()?;
            let arm = parser.scoped(parse_match_arm);
            parser.leave_nesting();
            let arm = arm?;
            let needs_comma = !arm.body.is_with_block();
            arms.push(arm);

            if parser.eat(TokenKind::Comma) || parser.current_token_kind() == TokenKind::CloseCurly
            {
                continue;
            }
            if needs_comma {
                return Err(parser.unexpected(&TokenKind::Comma.describe()));
            }
        }
        Ok(arms)
    })?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(ExprWithBlock::Match(MatchExpr {
        scrutinee: Box::new(scrutinee),
        arms,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

fn parse_match_arm(parser: &mut Parser<'_>) -> Result<MatchArm, Error> {
    let pattern = parse_pattern(parser)?;
    bind_pattern(parser, &pattern, None);

    let guard = if parser.eat(TokenKind::If) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::FatArrow)?;
    let body = parse_statement_expr(parser)?;

    Ok(MatchArm {
        span: pattern.get_span().to(body.get_span()),
        pattern,
        guard,
        body,
    })
}
