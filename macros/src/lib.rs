//! Procedural macros behind the `discriminated-union` crate.
//!
//! Use them through the facade crate, which also owns the traits the
//! generated code implements.

mod accessor;
mod args;
mod codegen;
mod conformance;
mod diagnostic;
mod extractor;
mod inspector;
mod membership;
mod naming;
mod predicate;
mod shape;
mod types;

use proc_macro::TokenStream;

/// Attribute macro deriving a payload-free companion enum and a family of
/// accessors from an enum declaration.
///
/// For an enum `Pet` it generates:
///
/// - `PetDiscriminant`, one unit variant per variant of `Pet` in the same
///   order, with `has_associated_type()` and the `DiscriminantType`
///   capabilities (equality, hashing, ordering, `ALL_CASES`, string and
///   integer coding keys, `Display`/`FromStr`);
/// - `Pet::discriminant(&self)`;
/// - `Pet::is_<variant>(&self)` for every variant;
/// - `Pet::tuple_from_<variant>(self)` and `Pet::tuple_from_<variant>_ref(&self)`
///   for every variant with fields, failing with
///   `PetPayloadExtractionError::InvalidExtraction { expected, actual }`;
/// - `impl DiscriminatedUnion for Pet`, unless `external_impl` is given.
///
/// Tuple fields are bound as `index0`, `index1`, ...; mark a callable field
/// (`fn() -> T`, `Box<dyn Fn() -> T>`, an `F: Fn() -> T` parameter, ...) with
/// `#[deferred]` to document that it is evaluated lazily. The marker is
/// stripped from the output.
///
/// # Arguments
///
/// - `discriminant = Name`: name of the companion enum
/// - `error = Name`: name of the extraction error
/// - `crate = "path"`: path to the facade crate
/// - `external_impl`: skip the `DiscriminatedUnion` impl
/// - `ref_only`: only generate the borrowing `tuple_from_<variant>_ref`
///   extractors, for enums that implement `Drop`
///
/// Variants gated with `#[cfg(..)]` keep that gate on everything generated
/// for them.
///
/// # Example
///
/// ```ignore
/// #[discriminated_union]
/// enum Pet {
///     Dog,
///     Cat { curious: bool },
///     Bird(String, i32),
///     Hydra(#[deferred] fn() -> String, String),
/// }
///
/// let bird = Pet::Bird("Polly".into(), 3);
/// assert!(bird.is_bird());
/// assert_eq!(bird.discriminant(), PetDiscriminant::Bird);
/// assert_eq!(bird.tuple_from_bird(), Ok(("Polly".to_string(), 3)));
/// ```
#[proc_macro_attribute]
pub fn discriminated_union(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::expand_or_error(args.into(), input.into()).into()
}

/// Test whether a value's discriminant is one of the given candidates.
///
/// # Example
///
/// ```ignore
/// let pet = Pet::Parrot;
/// assert!(!has_discriminant!(pet, PetDiscriminant::Dog, PetDiscriminant::Snake));
/// assert!(has_discriminant!(pet, PetDiscriminant::Parrot));
/// ```
#[proc_macro]
pub fn has_discriminant(input: TokenStream) -> TokenStream {
    match membership::expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
