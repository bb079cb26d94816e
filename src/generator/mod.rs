//! The generator capability and the primitive generators
//!
//! [`Generator`] is the one-method interface everything else implements or
//! wraps: `run` derives a value from a mutable entropy source. All combinator
//! constructors live on the trait so pipelines read left to right, the way
//! they execute.

use crate::collection::array::{Array, ArrayWith};
use crate::collection::dictionary::Dictionary;
use crate::collection::element::Element;
use crate::collection::set::SetOf;
use crate::collection::shuffle::Shuffled;
use crate::combinator::compact_map::CompactMap;
use crate::combinator::concat::{Append, Concat};
use crate::combinator::flat_map::FlatMap;
use crate::combinator::inspect::Inspect;
use crate::combinator::map::Map;
use crate::combinator::try_map::TryMap;
use crate::combinator::tuple::Pair;
use crate::combinator::zip::{Zip, ZipWith};
use crate::retry::attempt::{AttemptBounded, Fallback};
use crate::retry::distinct::Distinct;
use crate::retry::filter::Filter;
use crate::retry::retrying::Retry;
use num_traits::ToPrimitive;
use rand::RngCore;
use std::hash::Hash;

/// Constant generator
pub mod always;
/// Coin-flip generator
pub mod boolean;
/// Type-erased generator handle
pub mod boxed;
/// Character ranges and text presets
pub mod chars;
/// Float-in-range primitive
pub mod float_range;
/// Integer-in-range primitive
pub mod int_range;

/// Default attempt bound for [`Generator::filter`]
pub const FILTER_DEFAULT_ATTEMPTS: usize = 100;
/// Default attempt bound for [`Generator::retry`]
pub const RETRY_DEFAULT_ATTEMPTS: usize = 10;
/// Default attempt bound for [`Generator::distinct`]
pub const DISTINCT_DEFAULT_ATTEMPTS: usize = 100;

/// Equality predicate used by [`Generator::distinct`]
fn values_equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// An immutable description of how to derive a typed value from random bits
///
/// Implementations never store the entropy source and never mutate themselves
/// when run (the de-duplication cell of [`Distinct`] is the sole, documented
/// exception). Composition is pure: every combinator consumes its operands
/// and returns a new value-like generator, and sub-generators are always
/// sampled depth-first, left to right, so a pipeline replays exactly against
/// an identically seeded source.
pub trait Generator {
    /// The type of value this generator produces
    type Output;

    /// Derive one value, drawing entropy from `source`
    fn run(&self, source: &mut dyn RngCore) -> Self::Output;

    /// Derive one value from the system entropy source
    fn sample(&self) -> Self::Output
    where
        Self: Sized,
    {
        let mut source = rand::rng();
        self.run(&mut source)
    }

    /// Transform every produced value with `transform`
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use randkit::{Generator, Lcg, int_in};
    ///
    /// let doubled = int_in(1_u32, 10).map(|roll| roll * 2);
    /// let mut source = Lcg::seed_from_u64(42);
    /// assert_eq!(doubled.run(&mut source), 12);
    /// ```
    fn map<T, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        Map::new(self, transform)
    }

    /// Build a new generator from each produced value and sample it
    ///
    /// This is the mechanism for dependent generation: the shape of the
    /// output may hinge on a previously produced value.
    fn flat_map<G, F>(self, transform: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        G: Generator,
        F: Fn(Self::Output) -> G,
    {
        FlatMap::new(self, transform)
    }

    /// Resample until `transform` accepts a value
    ///
    /// Unbounded by design; when the transform can decline forever, cap the
    /// attempts with [`Generator::filter`] and map afterwards.
    fn compact_map<T, F>(self, transform: F) -> CompactMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<T>,
    {
        CompactMap::new(self, transform)
    }

    /// Apply a fallible transform once, yielding the `Result` as the value
    fn try_map<T, E, F>(self, transform: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<T, E>,
    {
        TryMap::new(self, transform)
    }

    /// Observe each produced value without changing it
    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output),
    {
        Inspect::new(self, observer)
    }

    /// Pair this generator with another, sampling `self` first
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Generator,
    {
        Zip::new(self, other)
    }

    /// Pair with another generator and map both values in the same call
    fn zip_with<B, T, F>(self, other: B, transform: F) -> ZipWith<Self, B, F>
    where
        Self: Sized,
        B: Generator,
        F: Fn(Self::Output, B::Output) -> T,
    {
        ZipWith::new(self, other, transform)
    }

    /// Sample this generator twice, pairing two independent results
    fn tuple(self) -> Pair<Self>
    where
        Self: Sized,
    {
        Pair::new(self)
    }

    /// Join this generator's output with another's around a separator
    fn concat<B>(self, other: B, separator: Self::Output) -> Concat<Self, B>
    where
        Self: Sized,
        B: Generator<Output = Self::Output>,
        Self::Output: Append + Clone,
    {
        Concat::new(self, other, separator)
    }

    /// Bound resampling against `condition`, falling back after `max_attempts`
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    fn attempt_bounded<P>(
        self,
        max_attempts: usize,
        condition: P,
        fallback: Fallback<Self::Output>,
    ) -> AttemptBounded<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        AttemptBounded::new(self, max_attempts, condition, fallback)
    }

    /// Keep only values satisfying `predicate`, up to a default attempt bound
    ///
    /// After [`FILTER_DEFAULT_ATTEMPTS`] misses the last sample is returned
    /// regardless; use [`Generator::filter_with`] to pick the bound and the
    /// fallback.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use randkit::{Generator, Lcg, int_in};
    ///
    /// let even = int_in(1_u32, 10).filter(|value| value % 2 == 0);
    /// let mut source = Lcg::seed_from_u64(42);
    /// assert_eq!(even.run(&mut source), 6);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, FILTER_DEFAULT_ATTEMPTS, predicate, Fallback::UseLast)
    }

    /// Keep only values satisfying `predicate` with an explicit bound and
    /// fallback
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    fn filter_with<P>(
        self,
        max_attempts: usize,
        predicate: P,
        fallback: Fallback<Self::Output>,
    ) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, max_attempts, predicate, fallback)
    }

    /// Resample until `until` holds, up to a default attempt bound
    fn retry<P>(self, until: P) -> Retry<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Retry::new(self, RETRY_DEFAULT_ATTEMPTS, until, Fallback::UseLast)
    }

    /// Resample until `until` holds with an explicit bound and fallback
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    fn retry_with<P>(
        self,
        max_attempts: usize,
        until: P,
        fallback: Fallback<Self::Output>,
    ) -> Retry<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Retry::new(self, max_attempts, until, fallback)
    }

    /// Produce a `Vec` of exactly `count` samples, in sampling order
    fn array(self, count: usize) -> Array<Self>
    where
        Self: Sized,
    {
        Array::new(self, count)
    }

    /// Produce a `Vec` whose length is drawn from `count` on every run
    ///
    /// Counts at or below zero yield an empty collection.
    fn array_with<C>(self, count: C) -> ArrayWith<Self, C>
    where
        Self: Sized,
        C: Generator,
        C::Output: ToPrimitive,
    {
        ArrayWith::new(self, count)
    }

    /// Assemble a `String` from exactly `count` character samples
    fn string(self, count: usize) -> Map<Array<Self>, fn(Vec<char>) -> String>
    where
        Self: Sized + Generator<Output = char>,
    {
        fn join(chars: Vec<char>) -> String {
            chars.into_iter().collect()
        }
        self.array(count).map(join as fn(Vec<char>) -> String)
    }

    /// Produce a `HashSet` from up to `count` samples
    ///
    /// Duplicate samples collapse, so the result may be smaller than the
    /// drawn count.
    fn set<C>(self, count: C) -> SetOf<Self, C>
    where
        Self: Sized,
        Self::Output: Eq + Hash,
        C: Generator,
        C::Output: ToPrimitive,
    {
        SetOf::new(self, count)
    }

    /// Produce a `HashMap` from a pair generator; duplicate keys keep the
    /// last generated value
    fn dictionary<C, K, V>(self, count: C) -> Dictionary<Self, C>
    where
        Self: Sized + Generator<Output = (K, V)>,
        K: Eq + Hash,
        C: Generator,
        C::Output: ToPrimitive,
    {
        Dictionary::new(self, count)
    }

    /// Draw one uniformly random element from each produced collection
    ///
    /// An empty collection yields `None`.
    fn element<T>(self) -> Element<Self>
    where
        Self: Sized + Generator<Output = Vec<T>>,
    {
        Element::new(self)
    }

    /// Permute each produced collection with a Fisher-Yates shuffle
    fn shuffled<T>(self) -> Shuffled<Self>
    where
        Self: Sized + Generator<Output = Vec<T>>,
    {
        Shuffled::new(self)
    }

    /// Avoid repeating the previous run's value, comparing with `==`
    fn distinct(self) -> Distinct<Self, fn(&Self::Output, &Self::Output) -> bool>
    where
        Self: Sized,
        Self::Output: PartialEq + Clone,
    {
        Distinct::new(
            self,
            DISTINCT_DEFAULT_ATTEMPTS,
            values_equal as fn(&Self::Output, &Self::Output) -> bool,
        )
    }

    /// Avoid repeating the previous run's value under a caller equivalence
    fn distinct_by<P>(self, equivalent: P) -> Distinct<Self, P>
    where
        Self: Sized,
        Self::Output: Clone,
        P: Fn(&Self::Output, &Self::Output) -> bool,
    {
        Distinct::new(self, DISTINCT_DEFAULT_ATTEMPTS, equivalent)
    }

    /// Avoid repeats under a caller equivalence with an explicit bound
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    fn distinct_with<P>(self, max_attempts: usize, equivalent: P) -> Distinct<Self, P>
    where
        Self: Sized,
        Self::Output: Clone,
        P: Fn(&Self::Output, &Self::Output) -> bool,
    {
        Distinct::new(self, max_attempts, equivalent)
    }

    /// Erase the concrete pipeline type behind a fixed-size handle
    fn boxed(self) -> boxed::BoxedGenerator<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        boxed::BoxedGenerator::new(self)
    }
}
