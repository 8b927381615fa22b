use std::fmt::{self, Write};
use std::num::NonZeroU32;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Sign {
    #[default]
    Pos,
    Neg,
}

impl Sign {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Pos),
            '-' => Some(Self::Neg),
            _ => None,
        }
    }

    /// `+1` or `-1`.
    pub const fn factor(self) -> Int {
        match self {
            Self::Pos => 1,
            Self::Neg => -1,
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Neg)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pos => f.write_char('+'),
            Self::Neg => f.write_char('-'),
        }
    }
}
