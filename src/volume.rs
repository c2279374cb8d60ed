use crate::{define_units, Bridge, Ladder, MeasureType, Quantity, Rung};

/// An amount of volume.
pub type Volume = Quantity<VolumeUnit>;

define_units! {
    /// A unit of volume.
    ///
    /// Liters are the pivot unit for approximate conversions. Metric cups and
    /// acre-feet are not supported because they sit on no ladder.
    pub enum VolumeUnit {
        /// Milliliters (`ml`).
        MilliLiters => "ml",
        /// Centiliters (`cl`).
        CentiLiters => "cl",
        /// Deciliters (`dl`).
        DeciLiters => "dl",
        /// Liters (`l`).
        Liters => "l",
        /// Kiloliters (`kl`).
        KiloLiters => "kl",
        /// Megaliters (`Ml`).
        MegaLiters => "Ml",
        /// Cubic millimeters (`mm3`).
        CubicMilliMeters => "mm3",
        /// Cubic centimeters (`cm3`).
        CubicCentiMeters => "cm3",
        /// Cubic decimeters (`dm3`).
        CubicDeciMeters => "dm3",
        /// Cubic feet (`ft3`).
        CubicFeet => "ft3",
        /// Cubic inches (`in3`).
        CubicInches => "in3",
        /// Cubic meters (`m3`).
        CubicMeters => "m3",
        /// Cubic kilometers (`km3`).
        CubicKiloMeters => "km3",
        /// Cubic miles (`mi3`).
        CubicMiles => "mi3",
        /// Cubic yards (`yd3`).
        CubicYards => "yd3",
        /// Imperial bushels (`bu`).
        Bushels => "bu",
        /// US cups (`cup`).
        Cups => "cup",
        /// US fluid ounces (`floz`).
        FluidOunces => "floz",
        /// US gallons (`gal`).
        Gallons => "gal",
        /// US pints (`pt`).
        Pints => "pt",
        /// US quarts (`qt`).
        Quarts => "qt",
        /// US tablespoons (`tbsp`).
        Tablespoons => "tbsp",
        /// US teaspoons (`tsp`).
        Teaspoons => "tsp",
        /// Imperial fluid ounces (`impfloz`).
        ImperialFluidOunces => "impfloz",
        /// Imperial gallons (`impgal`).
        ImperialGallons => "impgal",
        /// Imperial gills (`impgil`).
        ImperialGills => "impgil",
        /// Imperial pints (`imppt`).
        ImperialPints => "imppt",
        /// Imperial quarts (`impqt`).
        ImperialQuarts => "impqt",
        /// Imperial tablespoons (`imptbsp`).
        ImperialTablespoons => "imptbsp",
        /// Imperial teaspoons (`imptsp`).
        ImperialTeaspoons => "imptsp",
    }
    measure = MeasureType::Volume,
    pivot = Liters,
    ladders = &[CUBIC_METER, CUBIC_INCH, IMPERIAL, US_CUSTOMARY, LITER],
    bridges = &[
        Bridge::new(CUBIC_METER, VolumeUnit::CubicDeciMeters, 1.),
        Bridge::new(CUBIC_INCH, VolumeUnit::CubicFeet, LITERS_PER_CUBIC_FOOT),
        Bridge::new(IMPERIAL, VolumeUnit::ImperialPints, LITERS_PER_IMPERIAL_PINT),
        Bridge::new(US_CUSTOMARY, VolumeUnit::Pints, LITERS_PER_PINT),
        Bridge::new(LITER, VolumeUnit::Liters, 1.),
    ],
}

const LITER: Ladder<VolumeUnit> = Ladder::new(&[
    Rung::new(VolumeUnit::MilliLiters, 1),
    Rung::new(VolumeUnit::CentiLiters, 10),
    Rung::new(VolumeUnit::DeciLiters, 10),
    Rung::new(VolumeUnit::Liters, 10),
    Rung::new(VolumeUnit::KiloLiters, 1000),
    Rung::new(VolumeUnit::MegaLiters, 1000),
]);

const CUBIC_METER: Ladder<VolumeUnit> = Ladder::new(&[
    Rung::new(VolumeUnit::CubicMilliMeters, 1),
    Rung::new(VolumeUnit::CubicCentiMeters, 10 * 10 * 10),
    Rung::new(VolumeUnit::CubicDeciMeters, 10 * 10 * 10),
    Rung::new(VolumeUnit::CubicMeters, 10 * 10 * 10),
    Rung::new(VolumeUnit::CubicKiloMeters, 1000 * 1000 * 1000),
]);

const CUBIC_INCH: Ladder<VolumeUnit> = Ladder::new(&[
    Rung::new(VolumeUnit::CubicInches, 1),
    Rung::new(VolumeUnit::CubicFeet, 12 * 12 * 12),
    Rung::new(VolumeUnit::CubicYards, 3 * 3 * 3),
    Rung::new(VolumeUnit::CubicMiles, 1760 * 1760 * 1760),
]);

const IMPERIAL: Ladder<VolumeUnit> = Ladder::new(&[
    Rung::new(VolumeUnit::ImperialTeaspoons, 1),
    Rung::new(VolumeUnit::ImperialTablespoons, 3),
    Rung::new(VolumeUnit::ImperialFluidOunces, 2),
    Rung::new(VolumeUnit::ImperialGills, 5),
    Rung::new(VolumeUnit::ImperialPints, 4),
    Rung::new(VolumeUnit::ImperialQuarts, 2),
    Rung::new(VolumeUnit::ImperialGallons, 4),
    Rung::new(VolumeUnit::Bushels, 8),
]);

const US_CUSTOMARY: Ladder<VolumeUnit> = Ladder::new(&[
    Rung::new(VolumeUnit::Teaspoons, 1),
    Rung::new(VolumeUnit::Tablespoons, 3),
    Rung::new(VolumeUnit::FluidOunces, 2),
    Rung::new(VolumeUnit::Cups, 8),
    Rung::new(VolumeUnit::Pints, 2),
    Rung::new(VolumeUnit::Quarts, 2),
    Rung::new(VolumeUnit::Gallons, 4),
]);

const LITERS_PER_CUBIC_FOOT: f64 = 28.3168;
const LITERS_PER_IMPERIAL_PINT: f64 = 0.568_261;
const LITERS_PER_PINT: f64 = 0.473_176;
