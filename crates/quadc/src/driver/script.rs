//! Command script parser
//!
//! One command per line:
//!
//! ```text
//! insert <name> <type> <int>
//! lookup <name>
//! emit <op> <arg1> <arg2|_> <result>
//! reset
//! print
//! ```
//!
//! `_` stands for an absent second operand.

use super::lexer::{Lexer, Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};
use crate::ir::Quad;

/// Spelling of an absent operand
pub const ABSENT_OPERAND: &str = "_";

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert { name: String, ty: String, value: i64 },
    Lookup { name: String },
    Emit(Quad),
    Reset,
    Print,
}

/// A command with the span of its line
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub command: Command,
    pub span: Span,
}

/// Line-oriented parser for command scripts
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse every command in the script
    pub fn parse(&mut self) -> CompileResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.check(&TokenKind::Newline) {
                self.advance()?;
            }
            if self.at_end() {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> CompileResult<Token> {
        let prev = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        Ok(prev)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    /// Consume a word usable as a name, type, operand or operator
    fn word(&mut self, what: &str) -> CompileResult<(String, Span)> {
        match self.current.kind.text() {
            Some(text) => {
                let text = text.to_string();
                let token = self.advance()?;
                Ok((text, token.span))
            }
            None => Err(CompileError::script(
                format!("expected {what}, found {}", self.current.kind),
                self.current.span,
            )),
        }
    }

    fn end_of_command(&mut self) -> CompileResult<()> {
        match self.current.kind {
            TokenKind::Newline => {
                self.advance()?;
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(CompileError::script(
                format!("expected end of line, found {}", self.current.kind),
                self.current.span,
            )),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn parse_statement(&mut self) -> CompileResult<Statement> {
        let keyword = self.advance()?;
        let mut span = keyword.span;

        let command = match keyword.kind {
            TokenKind::Insert => {
                let (name, _) = self.word("a symbol name")?;
                let (ty, _) = self.word("a type")?;
                let (value, value_span) = self.int_value()?;
                span = span.merge(value_span);
                Command::Insert { name, ty, value }
            }
            TokenKind::Lookup => {
                let (name, name_span) = self.word("a symbol name")?;
                span = span.merge(name_span);
                Command::Lookup { name }
            }
            TokenKind::Emit => {
                let (op, _) = self.word("an operator")?;
                let (arg1, _) = self.word("an operand")?;
                let (arg2, _) = self.word("an operand or '_'")?;
                let (result, result_span) = self.word("a result name")?;
                span = span.merge(result_span);
                let arg2 = if arg2 == ABSENT_OPERAND { String::new() } else { arg2 };
                Command::Emit(Quad::new(op, arg1, arg2, result))
            }
            TokenKind::Reset => Command::Reset,
            TokenKind::Print => Command::Print,
            other => {
                return Err(CompileError::script(
                    format!("expected a command, found {other}"),
                    keyword.span,
                ));
            }
        };

        self.end_of_command()?;
        Ok(Statement { command, span })
    }

    fn int_value(&mut self) -> CompileResult<(i64, Span)> {
        let token = self.advance()?;
        match &token.kind {
            TokenKind::IntLiteral(text) => text
                .parse()
                .map(|value| (value, token.span))
                .map_err(|_| CompileError::script("integer out of range", token.span)),
            other => Err(CompileError::script(
                format!("expected an integer value, found {other}"),
                token.span,
            )),
        }
    }
}
