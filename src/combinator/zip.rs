//! Fixed-arity products of heterogeneous generators
//!
//! Operands are always sampled in declaration order, left to right, on every
//! run. A generator's entropy consumption is therefore unaffected by its
//! position in the product, which is what makes seeded replay compose.

use crate::generator::Generator;
use rand::RngCore;

/// Samples two generators in order, pairing the results
#[derive(Clone, Copy, Debug)]
pub struct Zip<A, B> {
    first: A,
    second: B,
}

impl<A, B> Zip<A, B> {
    /// Pair `first` with `second`, sampling `first` first
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Generator, B: Generator> Generator for Zip<A, B> {
    type Output = (A::Output, B::Output);

    fn run(&self, source: &mut dyn RngCore) -> Self::Output {
        (self.first.run(source), self.second.run(source))
    }
}

/// Samples three generators in order, producing a triple
#[derive(Clone, Copy, Debug)]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Zip3<A, B, C> {
    /// Group three generators, sampled left to right
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<A: Generator, B: Generator, C: Generator> Generator for Zip3<A, B, C> {
    type Output = (A::Output, B::Output, C::Output);

    fn run(&self, source: &mut dyn RngCore) -> Self::Output {
        (
            self.first.run(source),
            self.second.run(source),
            self.third.run(source),
        )
    }
}

/// Samples four generators in order, producing a quadruple
#[derive(Clone, Copy, Debug)]
pub struct Zip4<A, B, C, D> {
    first: A,
    second: B,
    third: C,
    fourth: D,
}

impl<A, B, C, D> Zip4<A, B, C, D> {
    /// Group four generators, sampled left to right
    pub const fn new(first: A, second: B, third: C, fourth: D) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }
}

impl<A: Generator, B: Generator, C: Generator, D: Generator> Generator for Zip4<A, B, C, D> {
    type Output = (A::Output, B::Output, C::Output, D::Output);

    fn run(&self, source: &mut dyn RngCore) -> Self::Output {
        (
            self.first.run(source),
            self.second.run(source),
            self.third.run(source),
            self.fourth.run(source),
        )
    }
}

/// Samples two generators in order and maps both values in the same call
#[derive(Clone, Copy, Debug)]
pub struct ZipWith<A, B, F> {
    first: A,
    second: B,
    transform: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    /// Pair two generators and combine their values with `transform`
    pub const fn new(first: A, second: B, transform: F) -> Self {
        Self {
            first,
            second,
            transform,
        }
    }
}

impl<A, B, F, T> Generator for ZipWith<A, B, F>
where
    A: Generator,
    B: Generator,
    F: Fn(A::Output, B::Output) -> T,
{
    type Output = T;

    fn run(&self, source: &mut dyn RngCore) -> T {
        let first = self.first.run(source);
        let second = self.second.run(source);
        (self.transform)(first, second)
    }
}

/// Pair two generators, sampling the first operand first
pub const fn zip<A: Generator, B: Generator>(first: A, second: B) -> Zip<A, B> {
    Zip::new(first, second)
}

/// Group three generators, sampled left to right
pub const fn zip3<A: Generator, B: Generator, C: Generator>(
    first: A,
    second: B,
    third: C,
) -> Zip3<A, B, C> {
    Zip3::new(first, second, third)
}

/// Group four generators, sampled left to right
pub const fn zip4<A: Generator, B: Generator, C: Generator, D: Generator>(
    first: A,
    second: B,
    third: C,
    fourth: D,
) -> Zip4<A, B, C, D> {
    Zip4::new(first, second, third, fourth)
}
