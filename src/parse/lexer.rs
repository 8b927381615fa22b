use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

/// The pieces a notation string is cut into before the scanner glues them
/// back together into dice, constants and template text.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[regex(r" +")]
    Spaces,
    #[regex(r"[0-9]+")]
    Digits,
    #[token("d")]
    Die,

    #[regex(r"[^0-9d +\-]+")]
    Text,

    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Plus => "'+'",
            Minus => "'-'",
            Spaces => "<spaces>",
            Digits => "<digits>",
            Die => "'d'",
            Text => "<text>",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
