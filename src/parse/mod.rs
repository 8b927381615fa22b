mod lexer;
mod parser;

pub use parser::{ParseError, ParseErrorKind};

use crate::expr::Expression;

pub(crate) fn parse(s: &str) -> Result<Expression, ParseError> {
    parser::Parser::new(s).parse()
}
