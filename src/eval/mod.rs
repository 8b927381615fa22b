mod num;
mod roller;

use crate::common::Int;

pub use num::Number;
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::StepRoller;

/// The capability set shared by every parsed value: terms, die groups,
/// constants and whole expressions.
#[enum_dispatch::enum_dispatch]
pub trait Evaluate {
    /// The lowest value a roll can produce.
    fn minimum(&self) -> Int;

    /// The highest value a roll can produce.
    fn maximum(&self) -> Int;

    /// The exact mean of all possible rolls.
    fn expectancy(&self) -> Number;

    /// Rolls using the given source of die faces.
    fn roll_with<R: Roller>(&self, roller: &mut R) -> Int;

    /// Rolls using the thread-local generator.
    fn roll(&self) -> Int {
        self.roll_with(&mut rand::thread_rng())
    }
}
