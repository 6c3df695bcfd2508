use std::rc::Rc;

use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str) -> Regex {
    Regex::new(&format!("^(?:{})", source)).expect("token pattern must compile")
}

fn fixed(text: &str) -> Regex {
    pattern(&regex::escape(text))
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern(r"\s+"), handler: skip_handler },
        RegexPattern { regex: pattern(r"//[^\n]*"), handler: skip_handler },
        RegexPattern { regex: pattern(r"/\*(?s:.)*?\*/"), handler: skip_handler },
        RegexPattern { regex: pattern(r"[a-zA-Z_][a-zA-Z0-9_]*"), handler: symbol_handler },
        RegexPattern {
            regex: pattern(r"(?:0b[0-9_]+|0o[0-9_]+|0x[0-9a-fA-F_]+|[0-9][0-9_]*)(?:[iu](?:8|16|32|64|128|size))?"),
            handler: literal_handler,
        },
        RegexPattern { regex: pattern(r"'(?:[^'\\\n]|\\x[0-9a-fA-F]{2}|\\.)'"), handler: literal_handler },
        RegexPattern { regex: pattern(r#"(?s)"(?:[^"\\]|\\.)*""#), handler: literal_handler },
        RegexPattern { regex: fixed("["), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: fixed("]"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: fixed("{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: fixed("}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: fixed("("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: fixed(")"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: fixed(">>="), handler: MK_DEFAULT_HANDLER!(TokenKind::ShrEquals, ">>=") },
        RegexPattern { regex: fixed("<<="), handler: MK_DEFAULT_HANDLER!(TokenKind::ShlEquals, "<<=") },
        RegexPattern { regex: fixed("+="), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: fixed("-="), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: fixed("*="), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: fixed("/="), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: fixed("%="), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
        RegexPattern { regex: fixed("^="), handler: MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=") },
        RegexPattern { regex: fixed("&="), handler: MK_DEFAULT_HANDLER!(TokenKind::AmpersandEquals, "&=") },
        RegexPattern { regex: fixed("|="), handler: MK_DEFAULT_HANDLER!(TokenKind::PipeEquals, "|=") },
        RegexPattern { regex: fixed("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: fixed("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: fixed("<="), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: fixed(">="), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: fixed("<<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Shl, "<<") },
        RegexPattern { regex: fixed(">>"), handler: MK_DEFAULT_HANDLER!(TokenKind::Shr, ">>") },
        RegexPattern { regex: fixed("&&"), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: fixed("||"), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: fixed("->"), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
        RegexPattern { regex: fixed("=>"), handler: MK_DEFAULT_HANDLER!(TokenKind::FatArrow, "=>") },
        RegexPattern { regex: fixed("::"), handler: MK_DEFAULT_HANDLER!(TokenKind::PathSep, "::") },
        RegexPattern { regex: fixed(".."), handler: MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..") },
        RegexPattern { regex: fixed("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: fixed("!"), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: fixed("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: fixed(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: fixed("&"), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: fixed("|"), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
        RegexPattern { regex: fixed("^"), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
        RegexPattern { regex: fixed("+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: fixed("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: fixed("*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: fixed("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: fixed("%"), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
        RegexPattern { regex: fixed("."), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: fixed(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: fixed(":"), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: fixed(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: fixed("?"), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: fixed("@"), handler: MK_DEFAULT_HANDLER!(TokenKind::At, "@") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn literal_handler(lexer: &mut Lexer, matched: &str) {
    let kind = match matched.as_bytes().first() {
        Some(b'\'') => TokenKind::Char,
        Some(b'"') => TokenKind::String,
        _ => TokenKind::Integer,
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, String::from(matched), span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, String::from(matched), span));
    lexer.advance_n(matched.len());
}

/// Splits `source` into tokens, always ending with an `EOF` token.
///
/// Every pattern is tried at the current position and the longest match wins,
/// earlier patterns winning ties. Keywords are split off identifiers through
/// `RESERVED_LOOKUP` once the whole word has been matched.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    info!("tokenizing {} ({} bytes)", lex.file, lex.source.len());

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let mut best: Option<(usize, RegexHandler)> = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                let len = found.end();
                if len > 0 && best.map_or(true, |(best_len, _)| len > best_len) {
                    best = Some((len, pattern.handler));
                }
            }
        }

        match best {
            Some((len, handler)) => {
                let matched = remainder[..len].to_string();
                handler(&mut lex, &matched);
            }
            None => {
                let token = remainder.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    Position(lex.pos as u32, Rc::clone(&lex.file)),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    info!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
