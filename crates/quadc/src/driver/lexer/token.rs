//! Token definitions for driver scripts

use crate::common::Span;
use logos::Logos;

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// All token kinds of the command language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]  // Skip whitespace other than newlines
#[logos(skip r"#[^\n]*")]     // Skip comments
pub enum TokenKind {
    // === Commands ===
    #[token("insert")]
    Insert,
    #[token("lookup")]
    Lookup,
    #[token("emit")]
    Emit,
    #[token("reset")]
    Reset,
    #[token("print")]
    Print,

    // === Operands ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*", priority = 3, callback = |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"-?[0-9]+", priority = 3, callback = |lex| lex.slice().to_string())]
    IntLiteral(String),

    #[regex(r"[-+*/%<>=!&|^~]+", priority = 3, callback = |lex| lex.slice().to_string())]
    Operator(String),

    /// Any other run of non-blank characters: `3.14`, `"s"`, `a[i]`, `f(x,y)`
    #[regex(r"[^ \t\r\f\n#]+", priority = 1, callback = |lex| lex.slice().to_string())]
    Word(String),

    /// Ends a command
    #[token("\n")]
    Newline,

    Eof,
}

impl TokenKind {
    /// Spelling of a token that can stand for a name, an operand or an operator
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(s)
            | TokenKind::IntLiteral(s)
            | TokenKind::Operator(s)
            | TokenKind::Word(s) => Some(s.as_str()),
            TokenKind::Insert => Some("insert"),
            TokenKind::Lookup => Some("lookup"),
            TokenKind::Emit => Some("emit"),
            TokenKind::Reset => Some("reset"),
            TokenKind::Print => Some("print"),
            TokenKind::Newline | TokenKind::Eof => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(s) => write!(f, "identifier '{s}'"),
            TokenKind::IntLiteral(s) => write!(f, "integer '{s}'"),
            TokenKind::Operator(s) => write!(f, "operator '{s}'"),
            TokenKind::Word(s) => write!(f, "'{s}'"),
            TokenKind::Newline => write!(f, "end of line"),
            TokenKind::Eof => write!(f, "end of file"),
            command => write!(f, "'{}'", command.text().unwrap_or_default()),
        }
    }
}
