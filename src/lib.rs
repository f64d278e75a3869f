//! Payload-free discriminants for Rust enums.
//!
//! Attach [`discriminated_union`] to an enum to generate a companion
//! discriminant enum, a `discriminant()` accessor, `is_<variant>()`
//! predicates and `tuple_from_<variant>()` payload extractors. The traits in
//! this crate are what the generated code implements.
//!
//! ```
//! use discriminated_union::{discriminated_union, has_discriminant, DiscriminatedUnion};
//!
//! #[discriminated_union]
//! #[derive(Debug)]
//! enum Pet {
//!     Dog,
//!     Cat { curious: bool },
//!     Bird(String, i32),
//! }
//!
//! let bird = Pet::Bird("Polly".to_string(), 3);
//! assert!(bird.is_bird());
//! assert!(bird.discriminant().has_associated_type());
//! assert!(has_discriminant!(bird, PetDiscriminant::Bird, PetDiscriminant::Dog));
//! assert!(bird.has_discriminant(&[PetDiscriminant::Bird]));
//!
//! let err = Pet::Dog.tuple_from_cat().unwrap_err();
//! assert_eq!(err.expected(), PetDiscriminant::Cat);
//! assert_eq!(err.actual(), PetDiscriminant::Dog);
//!
//! assert_eq!(bird.tuple_from_bird(), Ok(("Polly".to_string(), 3)));
//! ```

mod error;
mod traits;

#[cfg(feature = "serde")]
pub mod coding_key;

pub use discriminated_union_macros::{discriminated_union, has_discriminant};
pub use error::UnknownDiscriminant;
pub use traits::{CaseIterable, CodingKey, DiscriminantType, DiscriminatedUnion};
