use crate::ladder::Ladder;

/// Attaches a [`Ladder`] to a dimension's pivot unit using a floating point
/// constant.
///
/// Units on different ladders share no whole multiplier, so conversions
/// between them travel through the pivot unit: first along the source ladder
/// to its anchor unit, then across to the pivot using `pivot_per_anchor`, and
/// the same way back out to the target ladder.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bridge<U: 'static> {
    ladder: Ladder<U>,
    anchor: U,
    pivot_per_anchor: f64,
}

impl<U> Bridge<U>
where
    U: Copy + Eq + 'static,
{
    /// Returns a bridge from `ladder` to the pivot unit, where one `anchor` is
    /// `pivot_per_anchor` pivot units.
    ///
    /// `anchor` must be on `ladder`.
    #[must_use]
    pub const fn new(ladder: Ladder<U>, anchor: U, pivot_per_anchor: f64) -> Self {
        Self {
            ladder,
            anchor,
            pivot_per_anchor,
        }
    }

    /// Returns the ladder this bridge attaches.
    #[must_use]
    pub const fn ladder(&self) -> Ladder<U> {
        self.ladder
    }

    /// Returns the unit where this bridge's ladder meets the pivot.
    #[must_use]
    pub const fn anchor(&self) -> U {
        self.anchor
    }

    /// Returns how many pivot units make up one anchor unit.
    #[must_use]
    pub const fn pivot_per_anchor(&self) -> f64 {
        self.pivot_per_anchor
    }

    /// Returns `amount` of `unit` expressed in pivot units, or `None` if
    /// `unit` is not on this bridge's ladder.
    #[must_use]
    pub fn to_pivot(&self, amount: f64, unit: U) -> Option<f64> {
        let from = self.ladder.index_of(unit)?;
        let anchor = self.ladder.index_of(self.anchor)?;
        Some(self.ladder.scale(amount, from, anchor) * self.pivot_per_anchor)
    }

    /// Returns `amount` pivot units expressed in `unit`, or `None` if `unit`
    /// is not on this bridge's ladder.
    #[must_use]
    pub fn from_pivot(&self, amount: f64, unit: U) -> Option<f64> {
        let to = self.ladder.index_of(unit)?;
        let anchor = self.ladder.index_of(self.anchor)?;
        Some(self.ladder.scale(amount, anchor, to) / self.pivot_per_anchor)
    }
}

/// Converts `amount` from `from` to `to` by way of the pivot unit.
///
/// This conversion always produces a value. Its precision is limited by the
/// bridge constants, so it should only be used once an exact conversion has
/// been ruled out. A unit that no bridge knows about is treated as if it were
/// the pivot unit.
#[must_use]
pub fn convert_approx<U>(bridges: &[Bridge<U>], amount: f64, from: U, to: U) -> f64
where
    U: Copy + Eq + 'static,
{
    if from == to {
        return amount;
    }

    let pivot = bridges
        .iter()
        .find_map(|bridge| bridge.to_pivot(amount, from))
        .unwrap_or(amount);
    bridges
        .iter()
        .find_map(|bridge| bridge.from_pivot(pivot, to))
        .unwrap_or(pivot)
}
