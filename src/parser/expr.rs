use crate::{
    ast::{
        ast::Path,
        expressions::{
            ArrayExpr, ArrayRepeatExpr, AssignmentExpr, BinaryExpr, BorrowExpr, BreakExpr,
            CallExpr, CastExpr, CompoundAssignmentExpr, DerefExpr, Expr, ExprWithoutBlock,
            FieldExpr, GroupedExpr, IndexExpr, LiteralExpr, MethodCallExpr, PathExpr, ReturnExpr,
            StructLiteralExpr, StructLiteralField, UnaryExpr,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

/// Parses an expression whose infix operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_nud(parser).and_then(|left| parse_led(parser, left, bp));
    parser.leave_nesting();
    result
}

/// Parses one prefix term through the NUD table.
pub fn parse_nud(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("an expression")),
    };

    nud(parser)
}

/// Folds infix and postfix operators binding tighter than `bp` onto `left`.
pub fn parse_led(parser: &mut Parser<'_>, mut left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    loop {
        let token_kind = parser.current_token_kind();
        let binding_power = match parser.get_bp_lookup().get(&token_kind) {
            Some(binding_power) if *binding_power > bp => *binding_power,
            _ => break,
        };
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => break,
        };

        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn starts_expression(parser: &Parser<'_>) -> bool {
    parser
        .get_nud_lookup()
        .contains_key(&parser.current_token_kind())
}

/// Parses `a`, `a::b`, `self`, `Self::X`.
pub fn parse_path(parser: &mut Parser<'_>) -> Result<Path, Error> {
    let path_start = [TokenKind::Identifier, TokenKind::SelfValue, TokenKind::SelfType];
    let first = parser.expect_one_of(&path_start, "a path")?;
    let mut segments = vec![first.clone()];

    while parser.eat(TokenKind::PathSep) {
        segments.push(parser.expect_one_of(&path_start, "a path segment")?.clone());
    }

    Ok(Path {
        segments,
        span: parser.span_from(&first.span),
    })
}

pub fn parse_literal_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token = parser.advance()?.clone();
    Ok(ExprWithoutBlock::Literal(LiteralExpr { token }).into())
}

/// A path, or a struct literal when the path is followed by `{` and struct
/// literals are allowed here.
pub fn parse_path_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let path = parse_path(parser)?;

    if parser.current_token_kind() == TokenKind::OpenCurly && parser.struct_literal_allowed() {
        return parse_struct_literal_expr(parser, path);
    }

    Ok(ExprWithoutBlock::Path(PathExpr { path }).into())
}

fn parse_struct_literal_expr(parser: &mut Parser<'_>, path: Path) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let fields = parser.with_struct_literals(true, |parser| {
        let mut fields = vec![];
        while parser.current_token_kind() != TokenKind::CloseCurly {
            let name = parser.expect(TokenKind::Identifier)?.clone();
            let field = if parser.eat(TokenKind::Colon) {
                StructLiteralField {
                    name,
                    value: parse_expr(parser, BindingPower::Default)?,
                    is_shorthand: false,
                }
            } else {
                let value = ExprWithoutBlock::Path(PathExpr {
                    path: Path {
                        segments: vec![name.clone()],
                        span: name.span.clone(),
                    },
                });
                StructLiteralField {
                    name,
                    value: value.into(),
                    is_shorthand: true,
                }
            };
            fields.push(field);

            if !parser.eat(TokenKind::Comma) {
                break;
            }
        }
        parser.expect(TokenKind::CloseCurly)?;
        Ok(fields)
    })?;

    Ok(ExprWithoutBlock::StructLiteral(StructLiteralExpr {
        span: parser.span_from(&path.span),
        path,
        fields,
    })
    .into())
}

/// `-x` and `!x`.
pub fn parse_unary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let operator = parser.advance()?.clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWithoutBlock::Unary(UnaryExpr {
        span: operator.span.to(operand.get_span()),
        operator,
        operand: Box::new(operand),
    })
    .into())
}

pub fn parse_deref_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let star = parser.advance()?;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWithoutBlock::Deref(DerefExpr {
        span: star.span.to(operand.get_span()),
        operand: Box::new(operand),
    })
    .into())
}

/// `&x`, `&mut x`, `&&x`, `&&mut x`.
///
/// `&&` is two borrows: the outer one shared, the inner one carrying the
/// stated mutability.
pub fn parse_borrow_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let ampersand = parser.advance()?;
    let mutable = parser.eat(TokenKind::Mut);
    let operand = parse_expr(parser, BindingPower::Unary)?;
    let span = ampersand.span.to(operand.get_span());

    let borrow: Expr = ExprWithoutBlock::Borrow(BorrowExpr {
        mutable,
        operand: Box::new(operand),
        span: span.clone(),
    })
    .into();

    if ampersand.kind != TokenKind::And {
        return Ok(borrow);
    }

    Ok(ExprWithoutBlock::Borrow(BorrowExpr {
        mutable: false,
        operand: Box::new(borrow),
        span,
    })
    .into())
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let open = parser.advance()?;
    let inner = parser.with_struct_literals(true, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWithoutBlock::Grouped(GroupedExpr {
        inner: Box::new(inner),
        span: parser.span_from(&open.span),
    })
    .into())
}

/// `[a, b, c]` or `[value; length]`.
pub fn parse_array_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let open = parser.advance()?;

    let expr = parser.with_struct_literals(true, |parser| {
        if parser.eat(TokenKind::CloseBracket) {
            return Ok(ExprWithoutBlock::Array(ArrayExpr {
                elements: vec![],
                span: parser.span_from(&open.span),
            }));
        }

        let first = parse_expr(parser, BindingPower::Default)?;

        if parser.eat(TokenKind::Semicolon) {
            let length = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseBracket)?;
            return Ok(ExprWithoutBlock::ArrayRepeat(ArrayRepeatExpr {
                value: Box::new(first),
                length: Box::new(length),
                span: parser.span_from(&open.span),
            }));
        }

        let mut elements = vec![first];
        while parser.eat(TokenKind::Comma) {
            if parser.current_token_kind() == TokenKind::CloseBracket {
                break;
            }
            elements.push(parse_expr(parser, BindingPower::Default)?);
        }
        parser.expect(TokenKind::CloseBracket)?;

        Ok(ExprWithoutBlock::Array(ArrayExpr {
            elements,
            span: parser.span_from(&open.span),
        }))
    })?;

    Ok(expr.into())
}

pub fn parse_underscore_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    Ok(ExprWithoutBlock::Underscore(parser.advance()?.clone()).into())
}

pub fn parse_continue_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    Ok(ExprWithoutBlock::Continue(parser.advance()?.clone()).into())
}

fn parse_optional_value(parser: &mut Parser<'_>) -> Result<Option<Box<Expr>>, Error> {
    if starts_expression(parser) {
        Ok(Some(Box::new(parse_expr(parser, BindingPower::Default)?)))
    } else {
        Ok(None)
    }
}

pub fn parse_break_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.advance()?;
    let value = parse_optional_value(parser)?;

    Ok(ExprWithoutBlock::Break(BreakExpr {
        value,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

pub fn parse_return_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let keyword = parser.advance()?;
    let value = parse_optional_value(parser)?;

    Ok(ExprWithoutBlock::Return(ReturnExpr {
        value,
        span: parser.span_from(&keyword.span),
    })
    .into())
}

fn fold_binary(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<BinaryExpr, Error> {
    let operator = parser.advance()?.clone();
    let right = parse_expr(parser, bp)?;

    Ok(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

/// Arithmetic, bitwise and shift operators. Left-associative.
pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    Ok(ExprWithoutBlock::Binary(fold_binary(parser, left, bp)?).into())
}

/// `a < b < c` folds to `(a < b) < c`; whether that type-checks is not
/// the parser's business.
pub fn parse_comparison_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    Ok(ExprWithoutBlock::Comparison(fold_binary(parser, left, bp)?).into())
}

pub fn parse_lazy_boolean_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    Ok(ExprWithoutBlock::LazyBoolean(fold_binary(parser, left, bp)?).into())
}

/// `=` and the compound assignments. The right side is parsed below the
/// assignment tier so that `a = b = c` nests as `a = (b = c)`.
pub fn parse_assignment_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance()?.clone();
    let value = parse_expr(parser, BindingPower::Default)?;
    let span = left.get_span().to(value.get_span());

    let expr = if operator.kind == TokenKind::Assignment {
        ExprWithoutBlock::Assignment(AssignmentExpr {
            assignee: Box::new(left),
            value: Box::new(value),
            span,
        })
    } else {
        ExprWithoutBlock::CompoundAssignment(CompoundAssignmentExpr {
            assignee: Box::new(left),
            operator,
            value: Box::new(value),
            span,
        })
    };

    Ok(expr.into())
}

/// `expr as Type`
pub fn parse_cast_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::As)?;
    let target = parse_type(parser)?;

    Ok(ExprWithoutBlock::Cast(CastExpr {
        span: left.get_span().to(target.get_span()),
        operand: Box::new(left),
        target,
    })
    .into())
}

/// Comma-separated arguments up to and including the closing `)`.
fn parse_arguments(parser: &mut Parser<'_>) -> Result<Vec<Expr>, Error> {
    parser.with_struct_literals(true, |parser| {
        let mut arguments = vec![];
        while parser.current_token_kind() != TokenKind::CloseParen {
            arguments.push(parse_expr(parser, BindingPower::Default)?);
            if !parser.eat(TokenKind::Comma) {
                break;
            }
        }
        parser.expect(TokenKind::CloseParen)?;
        Ok(arguments)
    })
}

pub fn parse_call_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_arguments(parser)?;

    Ok(ExprWithoutBlock::Call(CallExpr {
        span: parser.span_from(left.get_span()),
        callee: Box::new(left),
        arguments,
    })
    .into())
}

pub fn parse_index_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let index = parser.with_struct_literals(true, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWithoutBlock::Index(IndexExpr {
        span: parser.span_from(left.get_span()),
        base: Box::new(left),
        index: Box::new(index),
    })
    .into())
}

/// `.field`, `.0` or `.method(args)`.
pub fn parse_member_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::Dot)?;
    let member = parser.expect_one_of(
        &[TokenKind::Identifier, TokenKind::Integer],
        "a field or method name",
    )?;

    if member.kind == TokenKind::Identifier && parser.eat(TokenKind::OpenParen) {
        let arguments = parse_arguments(parser)?;
        return Ok(ExprWithoutBlock::MethodCall(MethodCallExpr {
            span: parser.span_from(left.get_span()),
            receiver: Box::new(left),
            method: member.clone(),
            arguments,
        })
        .into());
    }

    Ok(ExprWithoutBlock::Field(FieldExpr {
        span: left.get_span().to(&member.span),
        base: Box::new(left),
        field: member.clone(),
    })
    .into())
}
