use crate::common::*;
use crate::eval::{Evaluate, Number, Roller};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// One unit of a notation: a fixed number or a group of identical dice.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Evaluate)]
pub enum Term {
    Constant(Constant),
    Dice(DieGroup),
}

impl Term {
    pub fn as_dice(&self) -> Option<&DieGroup> {
        match self {
            Self::Dice(dice) => Some(dice),
            Self::Constant(_) => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(c) => Some(c),
            Self::Dice(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => fmt::Display::fmt(c, f),
            Self::Dice(d) => fmt::Display::fmt(d, f),
        }
    }
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('d') {
            s.parse().map(Self::Dice)
        } else {
            s.parse().map(Self::Constant)
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Constant {
    pub value: Int,
}

impl Constant {
    pub const fn new(value: Int) -> Self {
        Self { value }
    }
}

impl Evaluate for Constant {
    fn minimum(&self) -> Int {
        self.value
    }

    fn maximum(&self) -> Int {
        self.value
    }

    fn expectancy(&self) -> Number {
        Number::Int(self.value)
    }

    fn roll_with<R: Roller>(&self, _roller: &mut R) -> Int {
        self.value
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for Constant {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped: String = s.chars().filter(|&c| c != ' ').collect();
        stripped
            .parse()
            .map(Self::new)
            .map_err(ParseTermError::InvalidNum)
    }
}

/// `count` dice with `sides` faces each, added or subtracted as a whole.
///
/// A group with no sides never contributes anything: every roll, bound and
/// expectancy of it is 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DieGroup {
    sign: Sign,
    count: UInt,
    sides: UInt,
}

impl DieGroup {
    /// Fails when the extreme values of the group do not fit in an [Int].
    pub fn new(sign: Sign, count: UInt, sides: UInt) -> Result<Self, ParseTermError> {
        Int::from(count)
            .checked_mul(Int::from(sides) + 1)
            .ok_or(ParseTermError::TooLarge { count, sides })?;
        Ok(Self { sign, count, sides })
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn count(&self) -> UInt {
        self.count
    }

    pub fn sides(&self) -> UInt {
        self.sides
    }

    /// Unsigned (lowest, highest) sum of the faces.
    fn face_bounds(&self) -> (Int, Int) {
        if self.sides == 0 {
            (0, 0)
        } else {
            let count = Int::from(self.count);
            (count, count * Int::from(self.sides))
        }
    }
}

impl Evaluate for DieGroup {
    fn minimum(&self) -> Int {
        let (low, high) = self.face_bounds();
        match self.sign {
            Sign::Pos => low,
            Sign::Neg => -high,
        }
    }

    fn maximum(&self) -> Int {
        let (low, high) = self.face_bounds();
        match self.sign {
            Sign::Pos => high,
            Sign::Neg => -low,
        }
    }

    fn expectancy(&self) -> Number {
        if self.sides == 0 {
            return Number::ZERO;
        }
        let halves = Int::from(self.count) * (Int::from(self.sides) + 1);
        Number::from_halves(self.sign.factor() * halves)
    }

    fn roll_with<R: Roller>(&self, roller: &mut R) -> Int {
        let total: Int = match NonZeroUInt::new(self.sides) {
            Some(sides) => roller.roll_dice(self.count, sides).map(Int::from).sum(),
            None => 0,
        };
        tracing::trace!(dice = %self, total, "rolled die group");
        self.sign.factor() * total
    }
}

impl fmt::Display for DieGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "{}", self.sign)?;
        }
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl FromStr for DieGroup {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.chars().next().and_then(Sign::from_char) {
            Some(sign) => (sign, &s[1..]),
            None => (Sign::Pos, s),
        };
        let (num, sides) = rest
            .trim_start_matches(' ')
            .split_once('d')
            .ok_or(ParseTermError::NoDelimiter)?;
        let num: String = num.chars().filter(|&c| c != ' ').collect();
        let count = if num.is_empty() {
            1
        } else {
            num.parse().map_err(ParseTermError::InvalidNum)?
        };
        let sides = sides.parse().map_err(ParseTermError::InvalidSides)?;
        Self::new(sign, count, sides)
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseTermError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid number: {0}")]
    InvalidNum(ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(ParseIntError),
    #[error("{count}d{sides} is too large to evaluate")]
    TooLarge { count: UInt, sides: UInt },
}
