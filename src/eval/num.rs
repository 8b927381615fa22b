use crate::common::Int;
use std::fmt;

/// An exact expected value.
///
/// Die groups average to a multiple of one half, so a value is either a whole
/// number or an odd number of halves. Arithmetic collapses back to [Number::Int]
/// whenever the result is whole.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Number {
    Int(Int),
    /// `Half(n)` is `n / 2`; `n` is always odd.
    Half(Int),
}

impl Number {
    pub const ZERO: Self = Self::Int(0);

    pub const fn from_halves(halves: Int) -> Self {
        if halves % 2 == 0 {
            Self::Int(halves / 2)
        } else {
            Self::Half(halves)
        }
    }

    /// `None` when the value cannot be held by either variant.
    pub fn try_from_halves(halves: i128) -> Option<Self> {
        if halves % 2 == 0 {
            Int::try_from(halves / 2).ok().map(Self::Int)
        } else {
            Int::try_from(halves).ok().map(Self::Half)
        }
    }

    /// Twice the value. Wide enough that doubling any [Number::Int] fits.
    pub const fn halves(self) -> i128 {
        match self {
            Self::Int(x) => x as i128 * 2,
            Self::Half(x) => x as i128,
        }
    }

    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn as_int(self) -> Option<Int> {
        match self {
            Self::Int(x) => Some(x),
            Self::Half(_) => None,
        }
    }

    pub fn as_float(self) -> f64 {
        match self {
            Self::Int(x) => x as f64,
            Self::Half(x) => x as f64 / 2.0,
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::try_from_halves(self.halves() + rhs.halves())
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::try_from_halves(self.halves() - rhs.halves())
    }

    pub fn checked_neg(self) -> Option<Self> {
        Self::try_from_halves(-self.halves())
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Panics on overflow, like the integer operators.
impl std::ops::Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Some(x) => x,
            None => panic!("attempt to negate with overflow"),
        }
    }
}

macro_rules! num_impl_bin_op {
    ($Name:ident, $fn_name:ident, $checked:ident, $verb:literal) => {
        /// Panics on overflow, like the integer operators.
        impl std::ops::$Name for Number {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                match self.$checked(rhs) {
                    Some(x) => x,
                    None => panic!(concat!("attempt to ", $verb, " with overflow")),
                }
            }
        }
    };
}

num_impl_bin_op!(Add, add, checked_add, "add");
num_impl_bin_op!(Sub, sub, checked_sub, "subtract");

impl PartialEq<Int> for Number {
    fn eq(&self, other: &Int) -> bool {
        *self == Self::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == *other
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Half(x) => fmt::Debug::fmt(&(*x as f64 / 2.0), f),
        }
    }
}
