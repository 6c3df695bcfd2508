//! Pattern parsing.
//!
//! A bare identifier is ambiguous: `x` may be a fresh binding or a known
//! constant or unit struct. With `resolve_patterns` on, names that the
//! scope table resolves to a constant or unit struct become path patterns;
//! everything else is a fresh binding. Only items declared earlier in the
//! source are visible.

use crate::{
    ast::{
        expressions::LiteralExpr,
        patterns::{
            IdentifierPattern, LiteralPattern, Pattern, ReferencePattern, TupleStructPattern,
        },
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    scope::symbols::Symbol,
};

use super::{expr::parse_path, parser::Parser};

pub fn parse_pattern(parser: &mut Parser<'_>) -> Result<Pattern, Error> {
    parser.enter_nesting()?;
    let result = parse_pattern_inner(parser);
    parser.leave_nesting();
    result
}

fn parse_pattern_inner(parser: &mut Parser<'_>) -> Result<Pattern, Error> {
    let token = parser.current_token()?;

    match token.kind {
        TokenKind::Dash => {
            parser.advance()?;
            let literal = parser.expect(TokenKind::Integer)?.clone();
            Ok(Pattern::Literal(LiteralPattern {
                span: token.span.to(&literal.span),
                literal: LiteralExpr { token: literal },
                negated: true,
            }))
        }
        kind if kind.is_literal() => {
            let literal = parser.advance()?.clone();
            Ok(Pattern::Literal(LiteralPattern {
                span: literal.span.clone(),
                literal: LiteralExpr { token: literal },
                negated: false,
            }))
        }
        TokenKind::Underscore => Ok(Pattern::Wildcard(parser.advance()?.clone())),
        TokenKind::Ampersand | TokenKind::And => parse_reference_pattern(parser),
        TokenKind::Ref | TokenKind::Mut => parse_identifier_pattern(parser),
        TokenKind::SelfValue | TokenKind::SelfType => parse_path_pattern(parser),
        TokenKind::Identifier => match parser.peek_kind(1) {
            TokenKind::PathSep | TokenKind::OpenParen => parse_path_pattern(parser),
            TokenKind::At => parse_identifier_pattern(parser),
            _ if names_pattern_constant(parser, &token.value) => parse_path_pattern(parser),
            _ => parse_identifier_pattern(parser),
        },
        _ => Err(parser.unexpected("a pattern")),
    }
}

fn names_pattern_constant(parser: &Parser<'_>, name: &str) -> bool {
    parser.options().resolve_patterns
        && parser
            .scopes()
            .lookup(name)
            .is_some_and(Symbol::is_pattern_constant)
}

/// `Color::Red`, or `Some(p, ..)` when followed by parentheses.
fn parse_path_pattern(parser: &mut Parser<'_>) -> Result<Pattern, Error> {
    let path = parse_path(parser)?;
    if !parser.eat(TokenKind::OpenParen) {
        return Ok(Pattern::Path(path));
    }

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        elements.push(parse_pattern(parser)?);
        if !parser.eat(TokenKind::Comma) {
            break;
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(Pattern::TupleStruct(TupleStructPattern {
        span: parser.span_from(&path.span),
        path,
        elements,
    }))
}

/// `ref mut name @ subpattern`, every part but the name optional.
fn parse_identifier_pattern(parser: &mut Parser<'_>) -> Result<Pattern, Error> {
    let start = parser.current_token()?.span.clone();
    let is_ref = parser.eat(TokenKind::Ref);
    let is_mut = parser.eat(TokenKind::Mut);
    let name = parser.expect(TokenKind::Identifier)?.clone();

    let subpattern = if parser.eat(TokenKind::At) {
        Some(Box::new(parse_pattern(parser)?))
    } else {
        None
    };

    Ok(Pattern::Identifier(IdentifierPattern {
        name,
        is_ref,
        is_mut,
        subpattern,
        span: parser.span_from(&start),
    }))
}

/// `&p`, `&mut p`; `&&p` and `&&mut p` are a shared layer around the
/// stated one, as in expressions.
fn parse_reference_pattern(parser: &mut Parser<'_>) -> Result<Pattern, Error> {
    let ampersand = parser.advance()?;
    let mutable = parser.eat(TokenKind::Mut);
    let inner = parse_pattern(parser)?;
    let span = ampersand.span.to(inner.get_span());

    let reference = Pattern::Reference(ReferencePattern {
        mutable,
        inner: Box::new(inner),
        span: span.clone(),
    });

    if ampersand.kind != TokenKind::And {
        return Ok(reference);
    }

    Ok(Pattern::Reference(ReferencePattern {
        mutable: false,
        inner: Box::new(reference),
        span,
    }))
}

/// Brings the bindings of `pattern` into the innermost scope. `ty` is the
/// annotated type, which applies to the outermost binding.
pub fn bind_pattern(parser: &mut Parser<'_>, pattern: &Pattern, ty: Option<&Type>) {
    let direct = matches!(pattern, Pattern::Identifier(_));

    for (index, binding) in pattern.bindings().into_iter().enumerate() {
        parser.bind(Symbol::Variable {
            name: binding.name.value.clone(),
            ty: if direct && index == 0 { ty.cloned() } else { None },
            mutable: binding.is_mut,
        });
    }
}
