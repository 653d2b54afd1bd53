//! Bounded draws from an injected generator. Nothing here holds global state.

use rand_chacha::rand_core::Rng;

/// Uniform in `[0, bound)`. A zero bound yields zero.
pub(crate) fn below<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    (rng.next_u64() % u64::from(bound)) as u32
}

/// Uniform in `[min, max]`.
pub(crate) fn range_inclusive<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    let span = (max - min) as u32 + 1;
    min + below(rng, span) as i32
}

/// True with probability `percent / 100`.
pub(crate) fn percent_chance<R: Rng + ?Sized>(rng: &mut R, percent: u32) -> bool {
    below(rng, 100) < percent
}
