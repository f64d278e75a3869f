//! Serde adapters encoding a discriminant as its string key.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Visit {
//!     #[serde(with = "discriminated_union::coding_key")]
//!     kind: PetDiscriminant,
//! }
//! ```

use serde::{de, Deserialize, Deserializer, Serializer};

use crate::{CodingKey, DiscriminantType, UnknownDiscriminant};

pub fn serialize<D, S>(value: &D, serializer: S) -> Result<S::Ok, S::Error>
where
    D: DiscriminantType,
    S: Serializer,
{
    serializer.serialize_str(value.string_value())
}

pub fn deserialize<'de, D, De>(deserializer: De) -> Result<D, De::Error>
where
    D: DiscriminantType,
    De: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    D::from_string_value(&key).ok_or_else(|| de::Error::custom(UnknownDiscriminant::new(&key)))
}
