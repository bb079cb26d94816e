//! Composable random value generation built from an algebra of generators
//!
//! A generator is an immutable description of how to derive a typed value from
//! a source of random bits. Pipelines are assembled from primitives via
//! combinators; building a pipeline never draws entropy, and running one
//! threads a single mutable source depth-first through the composed structure,
//! which makes every pipeline bit-exact replayable from a seeded source.
//!
//! ```
//! use rand::SeedableRng;
//! use randkit::{Generator, Lcg, int_in};
//!
//! let mut source = Lcg::seed_from_u64(42);
//! let die = int_in(1_u32, 10);
//! assert_eq!(die.run(&mut source), 6);
//! assert_eq!(die.run(&mut source), 10);
//! ```

#![forbid(unsafe_code)]

/// Collection construction, element selection, shuffling, and weighted choice
pub mod collection;
/// Transformation and structural combinators
pub mod combinator;
/// Core generator capability, primitives, and type erasure
pub mod generator;
/// Bounded-retry machinery and the stateful de-duplication operator
pub mod retry;
/// Domain samplers assembled from the public combinator surface
pub mod samplers;
/// Entropy sources and uniform draw mapping
pub mod source;

/// Command-line interface for running named samplers
pub mod cli;

pub use collection::element::element_of;
pub use collection::frequency::frequency;
pub use combinator::collect::collect;
pub use combinator::zip::{zip, zip3, zip4};
pub use generator::Generator;
pub use generator::always::always;
pub use generator::boolean::boolean;
pub use generator::boxed::BoxedGenerator;
pub use generator::chars::char_in;
pub use generator::float_range::float_in;
pub use generator::int_range::int_in;
pub use retry::attempt::Fallback;
pub use source::lcg::Lcg;
