#![cfg(feature = "rand")]

use std::collections::HashSet;

use discriminated_union::{discriminated_union, DiscriminantType, DiscriminatedUnion};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[discriminated_union]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts(u8),
    Spades { trump: bool },
}

#[discriminated_union]
pub enum Nothing {}

#[test]
fn test_random_covers_every_case() {
    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<SuitDiscriminant> = (0..200)
        .filter_map(|_| SuitDiscriminant::random_with(&mut rng))
        .collect();
    assert_eq!(seen.len(), SuitDiscriminant::count());
}

#[test]
fn test_random_is_reproducible() {
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..16)
            .map(|_| Suit::random_discriminant(&mut rng))
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(42), draw(42));
}

#[test]
fn test_random_without_cases() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(NothingDiscriminant::random_with(&mut rng), None);
    assert_eq!(NothingDiscriminant::random(), None);
    assert!(SuitDiscriminant::random().is_some());
}
