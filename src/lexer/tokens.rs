use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("as", TokenKind::As);
        map.insert("break", TokenKind::Break);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("else", TokenKind::Else);
        map.insert("enum", TokenKind::Enum);
        map.insert("false", TokenKind::False);
        map.insert("fn", TokenKind::Fn);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("impl", TokenKind::Impl);
        map.insert("in", TokenKind::In);
        map.insert("let", TokenKind::Let);
        map.insert("loop", TokenKind::Loop);
        map.insert("match", TokenKind::Match);
        map.insert("mod", TokenKind::Mod);
        map.insert("mut", TokenKind::Mut);
        map.insert("pub", TokenKind::Pub);
        map.insert("ref", TokenKind::Ref);
        map.insert("return", TokenKind::Return);
        map.insert("self", TokenKind::SelfValue);
        map.insert("Self", TokenKind::SelfType);
        map.insert("static", TokenKind::Static);
        map.insert("struct", TokenKind::Struct);
        map.insert("trait", TokenKind::Trait);
        map.insert("true", TokenKind::True);
        map.insert("type", TokenKind::Type);
        map.insert("unsafe", TokenKind::Unsafe);
        map.insert("use", TokenKind::Use);
        map.insert("where", TokenKind::Where);
        map.insert("while", TokenKind::While);
        map.insert("_", TokenKind::Underscore);

        // Keywords the grammar has no use for yet.
        map.insert("abstract", TokenKind::Abstract);
        map.insert("await", TokenKind::Await);
        map.insert("become", TokenKind::Become);
        map.insert("box", TokenKind::Box);
        map.insert("crate", TokenKind::Crate);
        map.insert("do", TokenKind::Do);
        map.insert("dyn", TokenKind::Dyn);
        map.insert("extern", TokenKind::Extern);
        map.insert("final", TokenKind::Final);
        map.insert("gen", TokenKind::Gen);
        map.insert("macro", TokenKind::Macro);
        map.insert("move", TokenKind::Move);
        map.insert("override", TokenKind::Override);
        map.insert("priv", TokenKind::Priv);
        map.insert("super", TokenKind::Super);
        map.insert("try", TokenKind::Try);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("unsized", TokenKind::Unsized);
        map.insert("virtual", TokenKind::Virtual);
        map.insert("yield", TokenKind::Yield);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Integer,
    Char,
    String,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,  // ||
    And, // &&

    Ampersand, // &
    Pipe,      // |
    Caret,     // ^
    Shl,       // <<
    Shr,       // >>

    Dot,
    DotDot,
    PathSep, // ::
    Semicolon,
    Colon,
    Question,
    Comma,
    At,
    Underscore,
    Arrow,    // ->
    FatArrow, // =>

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    CaretEquals,
    AmpersandEquals,
    PipeEquals,
    ShlEquals,
    ShrEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    As,
    Break,
    Const,
    Continue,
    Else,
    Enum,
    False,
    Fn,
    For,
    If,
    Impl,
    In,
    Let,
    Loop,
    Match,
    Mod,
    Mut,
    Pub,
    Ref,
    Return,
    SelfValue,
    SelfType,
    Static,
    Struct,
    Trait,
    True,
    Type,
    Unsafe,
    Use,
    Where,
    While,

    // Reserved, never valid in the grammar
    Abstract,
    Await,
    Become,
    Box,
    Crate,
    Do,
    Dyn,
    Extern,
    Final,
    Gen,
    Macro,
    Move,
    Override,
    Priv,
    Super,
    Try,
    Typeof,
    Unsized,
    Virtual,
    Yield,
}

impl TokenKind {
    /// Whether the kind is one of the assignment operators `=`, `+=`, ... `>>=`.
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::SlashEquals
                | TokenKind::PercentEquals
                | TokenKind::CaretEquals
                | TokenKind::AmpersandEquals
                | TokenKind::PipeEquals
                | TokenKind::ShlEquals
                | TokenKind::ShrEquals
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Char
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// How the kind reads in an error message, e.g. "`;`" or "an identifier".
    pub fn describe(&self) -> String {
        let text = match self {
            TokenKind::EOF => return String::from("end of input"),
            TokenKind::Identifier => return String::from("an identifier"),
            TokenKind::Integer => return String::from("an integer literal"),
            TokenKind::Char => return String::from("a character literal"),
            TokenKind::String => return String::from("a string literal"),
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::PathSep => "::",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::At => "@",
            TokenKind::Underscore => "_",
            TokenKind::Arrow => "->",
            TokenKind::FatArrow => "=>",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::StarEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::CaretEquals => "^=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::PipeEquals => "|=",
            TokenKind::ShlEquals => "<<=",
            TokenKind::ShrEquals => ">>=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            keyword => {
                return RESERVED_LOOKUP
                    .iter()
                    .find(|(_, kind)| *kind == keyword)
                    .map(|(text, _)| format!("`{}`", text))
                    .unwrap_or_else(|| format!("{:?}", keyword))
            }
        };
        format!("`{}`", text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified piece of source text. `value` is the raw text, never decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
