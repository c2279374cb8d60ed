#![doc = include_str!(".crate-docs.md")]
#![no_std]
use core::fmt::{Debug, Display};
use core::marker::PhantomData;
use core::str::FromStr;

#[cfg(any(feature = "std", test))]
extern crate std;

mod bridge;
mod error;
mod ladder;
mod mass;
mod measurements;
mod quantity;
mod volume;

pub use bridge::{convert_approx, Bridge};
pub use error::Error;
pub use ladder::{convert_exact, Amount, Ladder, Rung};
pub use mass::{Mass, MassUnit};
pub use measurements::{MeasureType, Measurements};
pub use quantity::Quantity;
pub use volume::{Volume, VolumeUnit};

/// A unit belonging to a single measurement dimension.
///
/// Each dimension registers its ladders, which are scanned in order for exact
/// conversions, and its bridges, which connect every unit to the dimension's
/// pivot unit for approximate conversions.
pub trait Unit:
    Copy + Eq + Debug + Display + FromStr<Err = Error> + Send + Sync + 'static
{
    /// The dimension this unit measures.
    const MEASURE: MeasureType;
    /// Every unit of this dimension.
    const ALL: &'static [Self];
    /// The unit that approximate conversions pass through.
    const PIVOT: Self;
    /// Ladders used for exact conversions, in priority order.
    const LADDERS: &'static [Ladder<Self>];
    /// Bridges from each ladder to [`Self::PIVOT`].
    const BRIDGES: &'static [Bridge<Self>];

    /// Returns the canonical short symbol of this unit, such as `"kg"`.
    fn symbol(self) -> &'static str;

    /// Returns the unit whose symbol is exactly `symbol`.
    #[must_use]
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.symbol() == symbol)
    }

    /// Splits `text` into its leading amount and the unit whose symbol is the
    /// longest suffix of `text`.
    #[must_use]
    fn split_suffix(text: &str) -> Option<(&str, Self)> {
        let (unit, symbol) = Self::ALL
            .iter()
            .map(|unit| (*unit, unit.symbol()))
            .filter(|(_, symbol)| text.ends_with(symbol))
            .max_by_key(|(_, symbol)| symbol.len())?;
        Some((&text[..text.len() - symbol.len()], unit))
    }

    /// Converts `amount` from `from` to `to` using only whole multipliers.
    ///
    /// Returns `None` when the units share no ladder, when the conversion
    /// overflows `T`, or when `T` is an integer and the result would have a
    /// fractional part.
    fn try_convert_exact<T: Amount>(amount: T, from: Self, to: Self) -> Option<T> {
        convert_exact(Self::LADDERS, amount, from, to)
    }

    /// Converts `amount` from `from` to `to` through [`Self::PIVOT`].
    #[must_use]
    fn convert_approx(amount: f64, from: Self, to: Self) -> f64 {
        convert_approx(Self::BRIDGES, amount, from, to)
    }

    /// Converts `amount` from `from` to `to`, exactly when possible and
    /// approximately otherwise.
    #[must_use]
    fn convert(amount: f64, from: Self, to: Self) -> f64 {
        Self::try_convert_exact(amount, from, to).unwrap_or_else(|| {
            tracing::trace!(
                measure = %Self::MEASURE,
                %from,
                %to,
                amount,
                "no exact conversion, bridging through pivot"
            );
            Self::convert_approx(amount, from, to)
        })
    }
}

/// Defines a unit enum along with its symbols, text conversions, serde
/// support, and [`Unit`] registration.
macro_rules! define_units {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $symbol:literal,
            )+
        }
        measure = $measure:expr,
        pivot = $pivot:ident,
        ladders = $ladders:expr,
        bridges = $bridges:expr,
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Unit for $name {
            const MEASURE: $crate::MeasureType = $measure;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const PIVOT: Self = Self::$pivot;
            const LADDERS: &'static [$crate::Ladder<Self>] = $ladders;
            const BRIDGES: &'static [$crate::Bridge<Self>] = $bridges;

            #[inline]
            fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::Unit::symbol(*self))
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::Unit>::from_symbol(s)
                    .ok_or($crate::Error::InvalidUnit(<Self as $crate::Unit>::MEASURE))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::Unit::symbol(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::SymbolVisitor::<Self>::new())
            }
        }
    };
}

pub(crate) use define_units;

/// Deserializes a [`Unit`] from its symbol.
pub(crate) struct SymbolVisitor<U>(PhantomData<U>);

impl<U> SymbolVisitor<U> {
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U> serde::de::Visitor<'_> for SymbolVisitor<U>
where
    U: Unit,
{
    type Value = U;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "a {} unit symbol", U::MEASURE)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        U::from_symbol(v).ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}
