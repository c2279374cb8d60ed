use core::fmt::Debug;

/// A numeric representation that can be scaled along a [`Ladder`].
///
/// This is implemented for `i32`, `i64`, `f32`, and `f64`. Integer
/// representations detect overflow and refuse to drop a remainder when
/// dividing. Floating representations treat a non-finite product as overflow
/// and divide without an exactness check.
pub trait Amount: Copy + PartialEq + Debug {
    /// The zero value of this representation.
    const ZERO: Self;
    /// The multiplicative identity of this representation.
    const ONE: Self;

    /// Returns `step` in this representation, or `None` if it does not fit.
    fn from_step(step: u64) -> Option<Self>;

    /// Returns `self * rhs`, or `None` if the product overflows.
    fn checked_scale_up(self, rhs: Self) -> Option<Self>;

    /// Returns `self / rhs`, or `None` if the quotient cannot be represented
    /// without loss.
    fn checked_scale_down(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_amount {
    ($($ty:ty),+) => {
        $(
            impl Amount for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_step(step: u64) -> Option<Self> {
                    Self::try_from(step).ok()
                }

                #[inline]
                fn checked_scale_up(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }

                #[inline]
                fn checked_scale_down(self, rhs: Self) -> Option<Self> {
                    if self.checked_rem(rhs)? == 0 {
                        self.checked_div(rhs)
                    } else {
                        None
                    }
                }
            }
        )+
    };
}

macro_rules! impl_float_amount {
    ($($ty:ty),+) => {
        $(
            impl Amount for $ty {
                const ZERO: Self = 0.;
                const ONE: Self = 1.;

                #[inline]
                #[expect(clippy::cast_precision_loss)]
                fn from_step(step: u64) -> Option<Self> {
                    Some(step as $ty)
                }

                #[inline]
                fn checked_scale_up(self, rhs: Self) -> Option<Self> {
                    let product = self * rhs;
                    product.is_finite().then_some(product)
                }

                #[inline]
                fn checked_scale_down(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )+
    };
}

impl_integer_amount!(i32, i64);
impl_float_amount!(f32, f64);

/// A single position on a [`Ladder`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Rung<U> {
    /// The unit at this position.
    pub unit: U,
    /// How many of the previous (smaller) unit make up one of this unit. The
    /// first rung of a ladder uses `1`.
    pub from_prev: u64,
}

impl<U> Rung<U> {
    /// Returns a rung for `unit` that is `from_prev` times the previous rung.
    #[must_use]
    pub const fn new(unit: U, from_prev: u64) -> Self {
        Self { unit, from_prev }
    }
}

/// An ordered sequence of units with whole multipliers between neighbors.
///
/// Unit systems usually define their units as a sequence where each unit is
/// a whole number of the previous one. A ladder captures that sequence so that
/// any two units on it can be converted without leaving integer arithmetic.
///
/// Rungs are ordered from the smallest unit to the largest.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Ladder<U: 'static> {
    rungs: &'static [Rung<U>],
}

impl<U> Ladder<U>
where
    U: Copy + Eq + 'static,
{
    /// Returns a ladder over `rungs`, ordered from smallest to largest.
    #[must_use]
    pub const fn new(rungs: &'static [Rung<U>]) -> Self {
        Self { rungs }
    }

    /// Returns the rungs of this ladder.
    #[must_use]
    pub const fn rungs(&self) -> &'static [Rung<U>] {
        self.rungs
    }

    /// Returns the position of `unit` on this ladder.
    #[must_use]
    pub fn index_of(&self, unit: U) -> Option<usize> {
        self.rungs.iter().position(|rung| rung.unit == unit)
    }

    /// Returns true if `unit` is on this ladder.
    #[must_use]
    pub fn contains(&self, unit: U) -> bool {
        self.index_of(unit).is_some()
    }

    /// Returns the multipliers crossed when walking from position `from` to
    /// position `to`.
    fn steps(&self, from: usize, to: usize) -> impl Iterator<Item = u64> + '_ {
        let (low, high) = if from < to { (from, to) } else { (to, from) };
        self.rungs[low + 1..=high].iter().map(|rung| rung.from_prev)
    }

    /// Returns how many of the smaller unit of positions `from` and `to` make
    /// up one of the larger unit.
    ///
    /// Returns `None` if the factor overflows `T`.
    #[must_use]
    pub fn factor<T: Amount>(&self, from: usize, to: usize) -> Option<T> {
        self.steps(from, to)
            .try_fold(T::ONE, |factor, step| {
                factor.checked_scale_up(T::from_step(step)?)
            })
    }

    /// Converts `amount` from `from` to `to` without losing precision.
    ///
    /// Returns `None` if either unit is missing from this ladder, if the
    /// conversion factor or the scaled amount overflows `T`, or if `T` is an
    /// integer and `amount` is not evenly divisible when moving to a larger
    /// unit.
    ///
    /// Converting a unit to itself, or converting zero, always succeeds and
    /// returns `amount` unchanged.
    #[must_use]
    pub fn convert<T: Amount>(&self, amount: T, from: U, to: U) -> Option<T> {
        if from == to || amount == T::ZERO {
            return Some(amount);
        }

        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        if from == to {
            return Some(amount);
        }

        let factor = self.factor::<T>(from, to)?;
        if from < to {
            amount.checked_scale_down(factor)
        } else {
            amount.checked_scale_up(factor)
        }
    }

    /// Scales `amount` from position `from` to position `to` using floating
    /// point arithmetic.
    ///
    /// Unlike [`Ladder::convert`], this never fails: non-finite values
    /// propagate through the arithmetic.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn scale(&self, amount: f64, from: usize, to: usize) -> f64 {
        let factor = self
            .steps(from, to)
            .fold(1., |factor, step| factor * step as f64);
        if from < to {
            amount / factor
        } else {
            amount * factor
        }
    }
}

/// Converts `amount` from `from` to `to` using the first ladder that contains
/// both units.
///
/// Ladders are tried in order. Returns `None` if no ladder contains both
/// units, or if the conversion on that ladder fails.
#[must_use]
pub fn convert_exact<U, T>(ladders: &[Ladder<U>], amount: T, from: U, to: U) -> Option<T>
where
    U: Copy + Eq + 'static,
    T: Amount,
{
    if from == to || amount == T::ZERO {
        return Some(amount);
    }

    ladders
        .iter()
        .find(|ladder| ladder.contains(from) && ladder.contains(to))?
        .convert(amount, from, to)
}
