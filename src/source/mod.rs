//! Entropy sources and the mapping from raw bits onto bounded domains
//!
//! Every generator draws from a caller-owned `RngCore` passed by mutable
//! reference. The source is never stored inside a generator, so one pipeline
//! can be replayed bit-exactly by re-seeding the source it is run against.

/// Deterministic linear congruential source for reproducible runs
pub mod lcg;
/// Bounded uniform draws shared by the range primitives
pub mod uniform;
