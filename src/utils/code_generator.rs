//! Short code generation with collision avoidance.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet.
//! Generation is a pure function over an injected randomness source and an
//! injected existence predicate, so unit tests can drive it with a seeded
//! RNG and a fake store.

use std::future::Future;

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::error::AppError;

/// Length of the first-phase candidates.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Draws at the initial length before the length starts escalating.
const FIXED_LENGTH_ATTEMPTS: usize = 10;

/// Draws a uniformly random code of `length` alphanumeric characters.
pub fn random_code<R: Rng>(rng: &mut R, length: usize) -> String {
    (&mut *rng)
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a short code that `is_taken` reports as free.
///
/// Two phases:
///
/// 1. Up to 10 draws at `initial_length`; the first free candidate wins.
/// 2. If all of those collide, the length is incremented by 1 and exactly
///    one candidate is drawn per new length until one is free. The key
///    space grows 62x per step, so this terminates quickly even when the
///    initial length is saturated.
///
/// Uniqueness is probabilistic per draw; the definitive guarantee is the
/// store's UNIQUE constraint on insert.
///
/// # Errors
///
/// Never fails on its own; errors only propagate from the predicate.
pub async fn generate_code<R, E, F>(
    rng: &mut R,
    initial_length: usize,
    is_taken: E,
) -> Result<String, AppError>
where
    R: Rng,
    E: Fn(String) -> F,
    F: Future<Output = Result<bool, AppError>>,
{
    for _ in 0..FIXED_LENGTH_ATTEMPTS {
        let code = random_code(rng, initial_length);
        if !is_taken(code.clone()).await? {
            return Ok(code);
        }
    }

    let mut length = initial_length;
    loop {
        length += 1;
        let code = random_code(rng, length);
        if !is_taken(code.clone()).await? {
            return Ok(code);
        }
    }
}
