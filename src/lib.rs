//! Parsing and evaluation of flat dice notation such as `3d6+2-1d4`.
//!
//! A notation is cut into [Term]s (constants and die groups) and a [Template]
//! holding the text around them, so a rolled result can be shown in the
//! layout it was written in.
//!
//! ```
//! use dice_notation::{expectancy, maximum, minimum};
//!
//! assert_eq!(expectancy("2d6").unwrap(), 7);
//! assert_eq!(expectancy("1d4").unwrap().to_string(), "2.5");
//! assert_eq!(minimum("-1d4").unwrap(), -4);
//! assert_eq!(maximum("3d6+2").unwrap(), 20);
//! ```

mod common;
mod eval;
mod expr;
mod parse;
mod term;

use std::borrow::Cow;

pub use common::{Int, NonZeroUInt, Sign, UInt};
pub use eval::{Evaluate, Number, Roller};
pub use expr::{Expression, Template};
pub use parse::{ParseError, ParseErrorKind};
pub use term::{Constant, DieGroup, ParseTermError, Term};

/// Parses a notation into an [Expression].
///
/// Fails when the text is blank, or when a count and `d` are not followed by
/// the number of sides.
pub fn parse(s: &str) -> Result<Expression, ParseError> {
    parse::parse(s)
}

/// Anything that can be evaluated: raw notation text or an already parsed value.
pub trait Notation {
    type Parsed: Evaluate + Clone;

    fn evaluable(&self) -> Result<Cow<'_, Self::Parsed>, ParseError>;
}

impl Notation for str {
    type Parsed = Expression;

    fn evaluable(&self) -> Result<Cow<'_, Expression>, ParseError> {
        parse(self).map(Cow::Owned)
    }
}

impl Notation for String {
    type Parsed = Expression;

    fn evaluable(&self) -> Result<Cow<'_, Expression>, ParseError> {
        self.as_str().evaluable()
    }
}

macro_rules! parsed_notation {
    ($($Ty:ty),*) => {
        $(
            impl Notation for $Ty {
                type Parsed = Self;

                fn evaluable(&self) -> Result<Cow<'_, Self>, ParseError> {
                    Ok(Cow::Borrowed(self))
                }
            }
        )*
    };
}

parsed_notation!(Expression, Term, Constant, DieGroup);

/// Rolls `x` with the thread-local generator.
pub fn roll<N: Notation + ?Sized>(x: &N) -> Result<Int, ParseError> {
    roll_with(x, &mut rand::thread_rng())
}

pub fn roll_with<N, R>(x: &N, roller: &mut R) -> Result<Int, ParseError>
where
    N: Notation + ?Sized,
    R: Roller,
{
    Ok(x.evaluable()?.roll_with(roller))
}

/// The exact mean of all rolls of `x`.
pub fn expectancy<N: Notation + ?Sized>(x: &N) -> Result<Number, ParseError> {
    Ok(x.evaluable()?.expectancy())
}

pub fn minimum<N: Notation + ?Sized>(x: &N) -> Result<Int, ParseError> {
    Ok(x.evaluable()?.minimum())
}

pub fn maximum<N: Notation + ?Sized>(x: &N) -> Result<Int, ParseError> {
    Ok(x.evaluable()?.maximum())
}
