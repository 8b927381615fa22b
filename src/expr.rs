use crate::common::*;
use crate::eval::{Evaluate, Number, Roller};
use crate::parse::ParseError;
use crate::term::Term;
use std::fmt::{self, Write};
use std::str::FromStr;

/// The text of a notation with a slot where each term was.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Template {
    pieces: NonEmpty<String>,
}

impl Template {
    /// `pieces` surround the slots, so there is always one more piece than
    /// there are slots.
    pub(crate) fn new(pieces: Vec<String>) -> Self {
        let pieces = NonEmpty::try_from_vec(pieces).unwrap_or_else(|_| vec1![String::new()]);
        Self { pieces }
    }

    pub fn slots(&self) -> usize {
        self.pieces.len() - 1
    }

    /// Writes one value into each slot, in order.
    pub fn fill<I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut ret = self.pieces.first().clone();
        for (value, piece) in values.into_iter().zip(&self.pieces[1..]) {
            write!(ret, "{}{}", value, piece).ok();
        }
        ret
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pieces.first())?;
        for piece in &self.pieces[1..] {
            f.write_str("{}")?;
            f.write_str(piece)?;
        }
        Ok(())
    }
}

/// A parsed notation: its terms in source order, and the template they sit in.
///
/// Bounds and expectancy are summed once, when the expression is built, so
/// evaluating a parsed expression never overflows.
///
/// # Examples
/// ```
/// use dice_notation::{parse, Evaluate};
///
/// let expr = parse("3d6+2").unwrap();
/// assert_eq!(expr.len(), 2);
/// assert_eq!((expr.minimum(), expr.maximum()), (5, 20));
/// assert_eq!(expr.expectancy().to_string(), "12.5");
/// assert_eq!(expr.to_string(), "3d6 + 2");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    terms: Vec<Term>,
    template: Template,
    minimum: Int,
    maximum: Int,
    expectancy: Number,
}

impl Expression {
    /// `None` when a total over the terms does not fit in an [Int].
    pub(crate) fn new(terms: Vec<Term>, template: Template) -> Option<Self> {
        debug_assert_eq!(terms.len(), template.slots());
        let total = |f: fn(&Term) -> i128| terms.iter().map(f).sum::<i128>();
        let minimum = Int::try_from(total(|t| t.minimum().into())).ok()?;
        let maximum = Int::try_from(total(|t| t.maximum().into())).ok()?;
        let expectancy = Number::try_from_halves(total(|t| t.expectancy().halves()))?;
        Some(Self {
            terms,
            template,
            minimum,
            maximum,
            expectancy,
        })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Rolls every term once and writes each result into its own slot.
    pub fn render(&self) -> String {
        self.render_with(&mut rand::thread_rng())
    }

    pub fn render_with<R: Roller>(&self, roller: &mut R) -> String {
        let rolls: Vec<Int> = self.terms.iter().map(|t| t.roll_with(roller)).collect();
        tracing::trace!(?rolls, "rendering rolled terms");
        self.template.fill(rolls)
    }
}

impl Evaluate for Expression {
    fn minimum(&self) -> Int {
        self.minimum
    }

    fn maximum(&self) -> Int {
        self.maximum
    }

    fn expectancy(&self) -> Number {
        self.expectancy
    }

    fn roll_with<R: Roller>(&self, roller: &mut R) -> Int {
        let total: i128 = self.terms.iter().map(|t| i128::from(t.roll_with(roller))).sum();
        // within [minimum, maximum], both of which fit
        total.clamp(self.minimum.into(), self.maximum.into()) as Int
    }
}

/// The terms written as a sum, e.g. `3d6 + 2 - 1d4`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let text = term.to_string();
            match text.strip_prefix('-') {
                _ if i == 0 => f.write_str(&text)?,
                Some(rest) => write!(f, " - {}", rest)?,
                None => write!(f, " + {}", text)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}
