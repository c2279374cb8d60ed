use crate::{define_units, Bridge, Ladder, MeasureType, Quantity, Rung};

/// An amount of mass.
pub type Mass = Quantity<MassUnit>;

define_units! {
    /// A unit of mass.
    ///
    /// Grams are the pivot unit for approximate conversions.
    pub enum MassUnit {
        /// Picograms (`pg`).
        Picograms => "pg",
        /// Nanograms (`ng`).
        Nanograms => "ng",
        /// Micrograms (`mcg`).
        Micrograms => "mcg",
        /// Milligrams (`mg`).
        Milligrams => "mg",
        /// Centigrams (`cg`).
        Centigrams => "cg",
        /// Decigrams (`dg`).
        Decigrams => "dg",
        /// Grams (`g`).
        Grams => "g",
        /// Kilograms (`kg`).
        Kilograms => "kg",
        /// Avoirdupois ounces (`oz`).
        Ounces => "oz",
        /// Avoirdupois pounds (`lb`).
        Pounds => "lb",
        /// Stones (`st`).
        Stones => "st",
        /// Metric tons (`ton`).
        MetricTons => "ton",
        /// Short tons (`sst`).
        ShortTons => "sst",
        /// Metric carats (`ct`).
        Carats => "ct",
        /// Troy ounces (`ozt`).
        OuncesTroy => "ozt",
        /// Slugs (`slug`).
        Slugs => "slug",
    }
    measure = MeasureType::Mass,
    pivot = Grams,
    ladders = &[METRIC, AVOIRDUPOIS],
    bridges = &[
        Bridge::new(METRIC, MassUnit::Grams, 1.),
        Bridge::new(AVOIRDUPOIS, MassUnit::Pounds, GRAMS_PER_POUND),
        Bridge::new(TROY, MassUnit::OuncesTroy, GRAMS_PER_TROY_OUNCE),
        Bridge::new(SLUG, MassUnit::Slugs, GRAMS_PER_SLUG),
        Bridge::new(SHORT_TON, MassUnit::ShortTons, GRAMS_PER_SHORT_TON),
    ],
}

// Measurements rarely need more than three decimal places before the next
// unit up is a better fit, so the SI prefixes are laid out in steps of 1000
// with the carat slotted in between decigrams and grams.
const METRIC: Ladder<MassUnit> = Ladder::new(&[
    Rung::new(MassUnit::Picograms, 1),
    Rung::new(MassUnit::Nanograms, 1000),
    Rung::new(MassUnit::Micrograms, 1000),
    Rung::new(MassUnit::Milligrams, 1000),
    Rung::new(MassUnit::Centigrams, 10),
    Rung::new(MassUnit::Decigrams, 10),
    Rung::new(MassUnit::Carats, 2),
    Rung::new(MassUnit::Grams, 5),
    Rung::new(MassUnit::Kilograms, 1000),
    Rung::new(MassUnit::MetricTons, 1000),
]);

const AVOIRDUPOIS: Ladder<MassUnit> = Ladder::new(&[
    Rung::new(MassUnit::Ounces, 1),
    Rung::new(MassUnit::Pounds, 16),
    Rung::new(MassUnit::Stones, 14),
]);

const TROY: Ladder<MassUnit> = Ladder::new(&[Rung::new(MassUnit::OuncesTroy, 1)]);
const SLUG: Ladder<MassUnit> = Ladder::new(&[Rung::new(MassUnit::Slugs, 1)]);
const SHORT_TON: Ladder<MassUnit> = Ladder::new(&[Rung::new(MassUnit::ShortTons, 1)]);

const GRAMS_PER_POUND: f64 = 453.592_37;
const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;
const GRAMS_PER_SLUG: f64 = 14_593.902_9;
const GRAMS_PER_SHORT_TON: f64 = 907_184.74;
