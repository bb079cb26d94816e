//! Linear congruential entropy source with unscrambled seeding

use rand::{RngCore, SeedableRng, rand_core::impls};

/// Multiplier of the affine state update
const MULTIPLIER: u64 = 2_862_933_555_777_941_757;
/// Increment of the affine state update
const INCREMENT: u64 = 3_037_000_493;

/// A linear congruential generator over the full 64-bit state space
///
/// Advances `state = a * state + c (mod 2^64)` and returns the new state on
/// every draw. The statistical quality is far below the default system
/// source; its value is determinism. Seeding through
/// [`SeedableRng::seed_from_u64`] installs the seed as the state verbatim,
/// with no scrambling, so a test that seeds with a known constant observes a
/// fully predictable draw sequence.
///
/// ```
/// use rand::{RngCore, SeedableRng};
/// use randkit::Lcg;
///
/// let mut source = Lcg::seed_from_u64(42);
/// assert_eq!(source.next_u64(), 9_562_744_903_453_244_591);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a source with the given initial state
    #[must_use]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    // The default implementation scrambles the seed through a mixing
    // constant, which would break replay against recorded sequences.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
