//! Bounded-retry machinery and the stateful de-duplication operator
//!
//! One state machine, [`attempt::AttemptBounded`], powers everything here:
//! sampling proceeds until a condition holds or an attempt budget runs out,
//! and an explicit fallback policy resolves the exhausted case. Filtering
//! and retrying are thin namings of that machine; de-duplication adds the
//! crate's only cross-call state on top of the same bounded loop.

/// The attempt-bounded state machine and its fallback policy
pub mod attempt;
/// Consecutive-repeat avoidance with a guarded last-value cell
pub mod distinct;
/// Predicate filtering specialization
pub mod filter;
/// Retry-until specialization
pub mod retrying;
