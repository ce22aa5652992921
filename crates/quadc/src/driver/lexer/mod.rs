//! Lexer module for tokenizing driver scripts

mod token;
mod scanner;

pub use token::{Token, TokenKind};
pub use scanner::Lexer;
