use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die faces for a [DieGroup](crate::DieGroup).
///
/// Every [rand::Rng] is a `Roller`, so a seeded generator gives reproducible rolls.
pub trait Roller {
    type Faces<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// `count` independent faces, each uniform in `1..=sides`.
    fn roll_dice(&mut self, count: UInt, sides: NonZeroUInt) -> Self::Faces<'_>;
}

impl<R: Rng> Roller for R {
    type Faces<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll_dice(&mut self, count: UInt, sides: NonZeroUInt) -> Self::Faces<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(count as usize)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Yields `initial, initial + step, ...`, wrapped into `1..=sides`.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        type Faces<'a> = std::vec::IntoIter<UInt>;

        fn roll_dice(&mut self, count: UInt, sides: NonZeroUInt) -> Self::Faces<'_> {
            let faces: Vec<_> = (0..count)
                .map(|_| {
                    let face = (self.current - 1) % sides.get() + 1;
                    self.current += self.step;
                    face
                })
                .collect();
            faces.into_iter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let sides = NonZeroUInt::new(6).unwrap();
        assert_eq!(rng.roll_dice(500, sides).count(), 500);
        assert!(rng.roll_dice(500, sides).all(|x| (1..=6).contains(&x)));
        assert_eq!(rng.roll_dice(0, sides).count(), 0);
    }

    #[test]
    fn test_step_roller_wraps() {
        let mut roller = StepRoller::new(NonZeroUInt::new(5).unwrap(), 1);
        let sides = NonZeroUInt::new(6).unwrap();
        let rolled: Vec<_> = roller.roll_dice(4, sides).collect();
        assert_eq!(rolled, vec![5, 6, 1, 2]);
        let rolled: Vec<_> = roller.roll_dice(2, sides).collect();
        assert_eq!(rolled, vec![3, 4]);
    }
}
