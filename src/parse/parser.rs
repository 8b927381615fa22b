use super::lexer::*;
use crate::expr::{Expression, Template};
use crate::term::{ParseTermError, Term};
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T = ()> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Nothing but whitespace was given.
    Empty,
    /// A count and a `d` with no sides after it, as in `3d+1`.
    MissingSides,
    /// The bounds or expectancy of the whole expression do not fit in an `Int`.
    OutOfRange,
    Term(ParseTermError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("expected a dice expression"),
            Self::MissingSides => write!(f, "expected {} after 'd'", TokenKind::Digits),
            Self::OutOfRange => f.write_str("expression total is too large to evaluate"),
            Self::Term(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Single pass over the lexer. Dice and numbers become [Term]s; everything
/// else is copied into the template around them.
pub struct Parser<'a> {
    src: &'a str,
    lexer: Lexer<'a>,
    text: String,
    pieces: Vec<String>,
    terms: Vec<Term>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            lexer: lexer(src),
            text: String::new(),
            pieces: Vec::new(),
            terms: Vec::new(),
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        if self.src.trim().is_empty() {
            return self.error(ParseErrorKind::Empty, 0..self.src.len());
        }

        while let Some((kind, span)) = self.advance() {
            match kind {
                TokenKind::Plus | TokenKind::Minus => self.parse_signed(span)?,
                TokenKind::Digits => self.parse_counted(span.start, span)?,
                TokenKind::Die => self.parse_uncounted(span.start, span)?,
                TokenKind::Spaces | TokenKind::Text | TokenKind::Error => self.residue(span),
            }
        }

        self.pieces.push(std::mem::take(&mut self.text));
        let template = Template::new(self.pieces);
        let expr = match Expression::new(self.terms, template) {
            Some(expr) => expr,
            None => {
                return Err(ParseError {
                    kind: ParseErrorKind::OutOfRange,
                    span: 0..self.src.len(),
                    slice: self.src.to_string(),
                })
            }
        };
        tracing::debug!(input = self.src, terms = expr.len(), "parsed dice expression");
        Ok(expr)
    }

    fn advance(&mut self) -> Option<(TokenKind, Range<usize>)> {
        let kind = self.lexer.next()?;
        Some((kind, self.lexer.span()))
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn error<T>(&self, kind: ParseErrorKind, span: Range<usize>) -> PResult<T> {
        Err(ParseError {
            kind,
            slice: self.src[span.clone()].to_string(),
            span,
        })
    }

    fn residue(&mut self, span: Range<usize>) {
        self.text.push_str(&self.src[span]);
    }

    fn parse_signed(&mut self, sign: Range<usize>) -> PResult {
        let start = sign.start;
        let mut end = sign.end;
        if self.matches(TokenKind::Spaces) {
            if let Some((_, spaces)) = self.advance() {
                end = spaces.end;
            }
        }

        if self.matches(TokenKind::Digits) {
            if let Some((_, digits)) = self.advance() {
                return self.parse_counted(start, digits);
            }
        } else if self.matches(TokenKind::Die) {
            if let Some((_, die)) = self.advance() {
                return self.parse_uncounted(start, die);
            }
        }
        self.residue(start..end);
        Ok(())
    }

    fn parse_counted(&mut self, start: usize, digits: Range<usize>) -> PResult {
        if !self.matches(TokenKind::Die) {
            return self.push_term(start..digits.end);
        }
        let die_end = match self.advance() {
            Some((_, die)) => die.end,
            None => digits.end,
        };
        if self.matches(TokenKind::Digits) {
            if let Some((_, sides)) = self.advance() {
                return self.push_term(start..sides.end);
            }
        }
        self.error(ParseErrorKind::MissingSides, start..die_end)
    }

    fn parse_uncounted(&mut self, start: usize, die: Range<usize>) -> PResult {
        if self.matches(TokenKind::Digits) {
            if let Some((_, sides)) = self.advance() {
                return self.push_term(start..sides.end);
            }
        }
        self.residue(start..die.end);
        Ok(())
    }

    fn push_term(&mut self, span: Range<usize>) -> PResult {
        let slice = &self.src[span.clone()];
        let term = match slice.parse::<Term>() {
            Ok(term) => term,
            Err(e) => return self.error(ParseErrorKind::Term(e), span),
        };
        tracing::trace!(token = slice, %term, "classified token");
        self.pieces.push(std::mem::take(&mut self.text));
        self.terms.push(term);
        Ok(())
    }
}
