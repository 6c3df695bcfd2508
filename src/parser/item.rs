//! Item parsing: functions, structs, enums, constants, traits and impls.

use log::debug;

use crate::{
    ast::{
        ast::{
            AssociatedItem, ConstantItem, EnumItem, FunctionItem, FunctionParam, ImplItem, Item,
            SelfParam, StructField, StructItem, TraitItem,
        },
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    scope::symbols::Symbol,
};

use super::{
    expr::parse_expr, lookups::BindingPower, parser::Parser, stmt::parse_block_expr,
    types::parse_type,
};

pub fn parse_item(parser: &mut Parser<'_>) -> Result<Item, Error> {
    match (parser.current_token_kind(), parser.peek_kind(1)) {
        (TokenKind::Fn, _) | (TokenKind::Const, TokenKind::Fn) => {
            Ok(Item::Function(parse_function(parser, false)?))
        }
        (TokenKind::Const, _) => Ok(Item::Constant(parse_constant(parser, false)?)),
        (TokenKind::Struct, _) => parse_struct(parser),
        (TokenKind::Enum, _) => parse_enum(parser),
        (TokenKind::Trait, _) => parse_trait(parser),
        (TokenKind::Impl, _) => parse_impl(parser),
        _ => Err(parser.unexpected("an item")),
    }
}

/// `const fn name(self, a: T) -> R { .. }`
///
/// A `;` in place of the body is accepted only when `allow_signature`
/// is set, i.e. inside a trait.
pub fn parse_function(
    parser: &mut Parser<'_>,
    allow_signature: bool,
) -> Result<FunctionItem, Error> {
    let start = parser.current_token()?.span.clone();
    let is_const = parser.eat(TokenKind::Const);
    parser.expect(TokenKind::Fn)?;
    let name = parser.expect(TokenKind::Identifier)?.clone();
    debug!("parsing fn `{}`", name.value);

    parser.scoped(|parser| {
        parser.expect(TokenKind::OpenParen)?;
        let self_param = parse_self_param(parser)?;
        if self_param.is_some() && parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
        let params = parse_function_params(parser)?;

        let return_type = if parser.eat(TokenKind::Arrow) {
            Some(parse_type(parser)?)
        } else {
            None
        };

        let body = if parser.current_token_kind() != TokenKind::Semicolon {
            Some(parse_block_expr(parser)?)
        } else if allow_signature {
            parser.advance()?;
            None
        } else {
            return Err(parser.unexpected("a function body"));
        };

        Ok(FunctionItem {
            is_const,
            name,
            self_param,
            params,
            return_type,
            body,
            span: parser.span_from(&start),
        })
    })
}

/// `self`, `mut self`, `&self`, `&mut self`, `self: Type`.
fn parse_self_param(parser: &mut Parser<'_>) -> Result<Option<SelfParam>, Error> {
    let is_self_param = matches!(
        (parser.peek_kind(0), parser.peek_kind(1), parser.peek_kind(2)),
        (TokenKind::SelfValue, _, _)
            | (TokenKind::Mut, TokenKind::SelfValue, _)
            | (TokenKind::Ampersand, TokenKind::SelfValue, _)
            | (TokenKind::Ampersand, TokenKind::Mut, TokenKind::SelfValue)
    );
    if !is_self_param {
        return Ok(None);
    }

    let start = parser.current_token()?.span.clone();
    let is_ref = parser.eat(TokenKind::Ampersand);
    let is_mut = parser.eat(TokenKind::Mut);
    parser.expect(TokenKind::SelfValue)?;

    let explicit_type = if !is_ref && parser.eat(TokenKind::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.declare(
        Symbol::Variable {
            name: String::from("self"),
            ty: explicit_type.clone(),
            mutable: is_mut,
        },
        &start.start,
    );

    Ok(Some(SelfParam {
        is_ref,
        is_mut,
        explicit_type,
        span: parser.span_from(&start),
    }))
}

/// `name: Type` pairs up to and including the closing `)`.
fn parse_function_params(parser: &mut Parser<'_>) -> Result<Vec<FunctionParam>, Error> {
    let mut params = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier)?.clone();
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;

        parser.declare(
            Symbol::Variable {
                name: name.value.clone(),
                ty: Some(ty.clone()),
                mutable: false,
            },
            &name.span.start,
        );
        params.push(FunctionParam {
            span: parser.span_from(&name.span),
            name,
            ty,
        });

        if !parser.eat(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(params)
}

/// `const NAME: Type = value;`. The value may be left out only in traits.
pub fn parse_constant(parser: &mut Parser<'_>, in_trait: bool) -> Result<ConstantItem, Error> {
    let keyword = parser.expect(TokenKind::Const)?;
    let name = parser
        .expect_one_of(&[TokenKind::Identifier, TokenKind::Underscore], "an identifier")?
        .clone();
    debug!("parsing const `{}`", name.value);
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;

    let value = if parser.eat(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else if in_trait {
        None
    } else {
        return Err(parser.unexpected(&TokenKind::Assignment.describe()));
    };
    parser.expect(TokenKind::Semicolon)?;

    Ok(ConstantItem {
        name,
        ty,
        value,
        span: parser.span_from(&keyword.span),
    })
}

/// `struct Name;` or `struct Name { field: Type, .. }`.
fn parse_struct(parser: &mut Parser<'_>) -> Result<Item, Error> {
    let keyword = parser.expect(TokenKind::Struct)?;
    let name = parser.expect(TokenKind::Identifier)?.clone();
    debug!("parsing struct `{}`", name.value);

    let fields = match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance()?;
            None
        }
        TokenKind::OpenCurly => Some(parse_struct_fields(parser)?),
        _ => return Err(parser.unexpected("`{` or `;`")),
    };

    Ok(Item::Struct(StructItem {
        name,
        fields,
        span: parser.span_from(&keyword.span),
    }))
}

fn parse_struct_fields(parser: &mut Parser<'_>) -> Result<Vec<StructField>, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    let mut fields = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        let name = parser.expect(TokenKind::Identifier)?.clone();
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        fields.push(StructField {
            span: parser.span_from(&name.span),
            name,
            ty,
        });

        if !parser.eat(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(fields)
}

/// `enum Name { A, B, C }`. Variants carry no payload.
fn parse_enum(parser: &mut Parser<'_>) -> Result<Item, Error> {
    let keyword = parser.expect(TokenKind::Enum)?;
    let name = parser.expect(TokenKind::Identifier)?.clone();
    debug!("parsing enum `{}`", name.value);
    parser.expect(TokenKind::OpenCurly)?;

    let mut variants: Vec<Token> = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        variants.push(parser.expect(TokenKind::Identifier)?.clone());
        if !parser.eat(TokenKind::Comma) {
            break;
        }
    }
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Item::Enum(EnumItem {
        name,
        variants,
        span: parser.span_from(&keyword.span),
    }))
}

fn parse_trait(parser: &mut Parser<'_>) -> Result<Item, Error> {
    let keyword = parser.expect(TokenKind::Trait)?;
    let name = parser.expect(TokenKind::Identifier)?.clone();
    debug!("parsing trait `{}`", name.value);
    let items = parser.scoped(|parser| parse_associated_items(parser, true))?;

    Ok(Item::Trait(TraitItem {
        name,
        items,
        span: parser.span_from(&keyword.span),
    }))
}

/// `impl Type { .. }` or `impl Trait for Type { .. }`.
fn parse_impl(parser: &mut Parser<'_>) -> Result<Item, Error> {
    let keyword = parser.expect(TokenKind::Impl)?;

    let trait_name = if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_kind(1) == TokenKind::For
    {
        let trait_name = parser.advance()?.clone();
        parser.advance()?;
        Some(trait_name)
    } else {
        None
    };

    let target: Type = parse_type(parser)?;
    debug!("parsing impl for `{}`", target);
    let items = parser.scoped(|parser| parse_associated_items(parser, false))?;

    Ok(Item::Impl(ImplItem {
        trait_name,
        target,
        items,
        span: parser.span_from(&keyword.span),
    }))
}

/// `{ const .. ; fn .. }`, the body of a trait or impl.
fn parse_associated_items(
    parser: &mut Parser<'_>,
    in_trait: bool,
) -> Result<Vec<AssociatedItem>, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    let mut items = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        let position = parser.get_position();
        let item = match (parser.current_token_kind(), parser.peek_kind(1)) {
            (TokenKind::Fn, _) | (TokenKind::Const, TokenKind::Fn) => {
                AssociatedItem::Function(parse_function(parser, in_trait)?)
            }
            (TokenKind::Const, _) => AssociatedItem::Constant(parse_constant(parser, in_trait)?),
            _ => return Err(parser.unexpected("an associated item")),
        };

        parser.declare(Symbol::from_associated_item(&item), &position);
        items.push(item);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(items)
}
