//! Injectable permutation source for blinding the heatmap order.
//!
//! Method order is re-randomized on every assignment response so no method
//! gains a positional advantage across participants or page reloads. The
//! trait seam exists so tests can substitute a deterministic implementation
//! and assert on payload contents without fighting randomness.

use rand::seq::SliceRandom;

/// Produces a permutation of the method list in place.
pub trait Shuffler: Send + Sync + 'static {
    fn shuffle(&self, methods: &mut [&'static str]);
}

/// Production shuffler backed by the thread-local CSPRNG.
///
/// Uniform over permutations, with no pattern discoverable across calls.
#[derive(Debug, Default)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&self, methods: &mut [&'static str]) {
        methods.shuffle(&mut rand::rng());
    }
}

/// Test shuffler that leaves the slice untouched.
#[derive(Debug, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&self, _methods: &mut [&'static str]) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
