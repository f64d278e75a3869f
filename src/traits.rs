//! Capabilities implemented by generated code

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::UnknownDiscriminant;

/// Types with a fixed, enumerable set of values.
pub trait CaseIterable: Sized + 'static {
    /// Every value, in declaration order.
    const ALL_CASES: &'static [Self];
}

/// Values usable as keys of a serialized key space, addressable both by
/// name and by position.
pub trait CodingKey: Sized {
    /// The variant name, e.g. `"Bird"`.
    fn string_value(&self) -> &'static str;

    /// The zero-based declaration position.
    fn int_value(&self) -> usize;

    fn from_string_value(value: &str) -> Option<Self>;

    fn from_int_value(value: usize) -> Option<Self>;
}

/// A payload-free discriminant generated by `#[discriminated_union]`.
pub trait DiscriminantType:
    Copy
    + Eq
    + Hash
    + Ord
    + Debug
    + Display
    + FromStr<Err = UnknownDiscriminant>
    + CaseIterable
    + CodingKey
    + Send
    + Sync
    + 'static
{
    fn all_cases() -> &'static [Self] {
        Self::ALL_CASES
    }

    fn count() -> usize {
        Self::ALL_CASES.len()
    }

    /// Pick a discriminant uniformly, `None` if there are no variants.
    #[cfg(feature = "rand")]
    fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        use rand::seq::SliceRandom;
        Self::ALL_CASES.choose(rng).copied()
    }

    #[cfg(feature = "rand")]
    fn random() -> Option<Self> {
        Self::random_with(&mut rand::thread_rng())
    }
}

/// An enum with a payload-free discriminant.
///
/// Implemented by `#[discriminated_union]` unless `external_impl` is given,
/// in which case the enum provides the impl itself.
pub trait DiscriminatedUnion {
    type Discriminant: DiscriminantType;

    fn discriminant(&self) -> Self::Discriminant;

    /// Whether the discriminant is one of `acceptable`.
    fn has_discriminant(&self, acceptable: &[Self::Discriminant]) -> bool {
        acceptable.contains(&self.discriminant())
    }

    #[cfg(feature = "rand")]
    fn random_discriminant<R: rand::Rng + ?Sized>(rng: &mut R) -> Option<Self::Discriminant>
    where
        Self: Sized,
    {
        Self::Discriminant::random_with(rng)
    }
}
