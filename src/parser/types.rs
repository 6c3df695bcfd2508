//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Path types (`i32`, `Self`, `module::Name`)
//! - Reference types (`&T`, `&mut T`, `&&T`)
//! - Array and slice types (`[T; N]`, `[T]`)
//! - Tuple, unit and parenthesized types
//! - The never type `!` and the inferred type `_`
//!
//! Like expressions, types dispatch on their first token through a NUD
//! lookup table.

use crate::{
    ast::types::{ArrayType, PathType, ReferenceType, SliceType, TupleType, Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_path},
    lookups::BindingPower,
    parser::Parser,
};

pub fn parse_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("a type")),
    };

    parser.enter_nesting()?;
    let result = nud(parser);
    parser.leave_nesting();
    result
}

pub fn parse_path_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    Ok(Type::Path(PathType {
        path: parse_path(parser)?,
    }))
}

/// `&T`, `&mut T`; `&&T` is a shared reference to `&T`.
pub fn parse_reference_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let ampersand = parser.advance()?;
    let mutable = parser.eat(TokenKind::Mut);
    let target = parse_type(parser)?;
    let span = ampersand.span.to(target.get_span());

    let reference = Type::Reference(ReferenceType {
        mutable,
        target: Box::new(target),
        span: span.clone(),
    });

    if ampersand.kind != TokenKind::And {
        return Ok(reference);
    }

    Ok(Type::Reference(ReferenceType {
        mutable: false,
        target: Box::new(reference),
        span,
    }))
}

/// `[T; N]` or `[T]`.
pub fn parse_array_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let open = parser.advance()?;
    let element = Box::new(parse_type(parser)?);

    if !parser.eat(TokenKind::Semicolon) {
        parser.expect(TokenKind::CloseBracket)?;
        return Ok(Type::Slice(SliceType {
            element,
            span: parser.span_from(&open.span),
        }));
    }

    let length = parser.with_struct_literals(true, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Type::Array(ArrayType {
        element,
        length: Box::new(length),
        span: parser.span_from(&open.span),
    }))
}

/// `()`, `(T)` (just `T`), `(T,)`, `(A, B)`.
pub fn parse_tuple_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let open = parser.advance()?;

    if parser.eat(TokenKind::CloseParen) {
        return Ok(Type::Tuple(TupleType {
            elements: vec![],
            span: parser.span_from(&open.span),
        }));
    }

    let first = parse_type(parser)?;
    if parser.eat(TokenKind::CloseParen) {
        return Ok(first);
    }

    let mut elements = vec![first];
    while parser.eat(TokenKind::Comma) {
        if parser.current_token_kind() == TokenKind::CloseParen {
            break;
        }
        elements.push(parse_type(parser)?);
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(Type::Tuple(TupleType {
        elements,
        span: parser.span_from(&open.span),
    }))
}

pub fn parse_never_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    Ok(Type::Never(parser.advance()?.clone()))
}

pub fn parse_inferred_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    Ok(Type::Inferred(parser.advance()?.clone()))
}
