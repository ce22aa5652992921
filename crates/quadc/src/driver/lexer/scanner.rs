//! Lexer implementation using logos

use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};
use logos::Logos;

/// Lexer for driver scripts
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            at_eof: false,
        }
    }

    /// Get the next token; `Eof` repeats once the input is exhausted
    pub fn next_token(&mut self) -> CompileResult<Token> {
        if self.at_eof {
            let len = self.inner.source().len();
            return Ok(Token::new(TokenKind::Eof, Span::new(len, len)));
        }

        match self.inner.next() {
            Some(Ok(kind)) => Ok(Token::new(kind, self.inner.span().into())),
            Some(Err(())) => Err(CompileError::script(
                format!("unexpected character '{}'", self.inner.slice()),
                self.inner.span().into(),
            )),
            None => {
                self.at_eof = true;
                self.next_token()
            }
        }
    }

    /// Tokenize the entire source, ending with `Eof`
    pub fn tokenize_all(mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize_all()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            kinds("insert lookup emit reset print"),
            vec![
                TokenKind::Insert,
                TokenKind::Lookup,
                TokenKind::Emit,
                TokenKind::Reset,
                TokenKind::Print,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_emit_line() {
        assert_eq!(
            kinds("emit <= t1 -4 t2\n"),
            vec![
                TokenKind::Emit,
                TokenKind::Operator("<=".to_string()),
                TokenKind::Identifier("t1".to_string()),
                TokenKind::IntLiteral("-4".to_string()),
                TokenKind::Identifier("t2".to_string()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_and_keyword_prefixes() {
        assert_eq!(
            kinds("# header\ninserted _ # trailing"),
            vec![
                TokenKind::Newline,
                TokenKind::Identifier("inserted".to_string()),
                TokenKind::Identifier("_".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = Lexer::new("lookup  x").tokenize_all().unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 9));
        assert_eq!(tokens[2].span, Span::new(9, 9));
    }

    #[test]
    fn test_other_operands_are_words() {
        assert_eq!(
            kinds("3.14 \"hi\" a[i] f(x,y) $"),
            vec![
                TokenKind::Word("3.14".to_string()),
                TokenKind::Word("\"hi\"".to_string()),
                TokenKind::Word("a[i]".to_string()),
                TokenKind::Word("f(x,y)".to_string()),
                TokenKind::Word("$".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_word_stops_at_comment() {
        assert_eq!(
            kinds("x[0]# note"),
            vec![TokenKind::Word("x[0]".to_string()), TokenKind::Eof]
        );
    }
}
