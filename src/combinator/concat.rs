//! Join two generated values around a separator

use crate::generator::Generator;
use rand::RngCore;

/// Element types that support binary append
///
/// The hook [`Concat`] uses to join generated values. Implemented for the
/// concatenable built-ins: character sequences and growable arrays, which
/// covers byte buffers as `Vec<u8>`.
pub trait Append {
    /// Append `other` onto the end of `self`
    #[must_use]
    fn append(self, other: Self) -> Self;
}

impl Append for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Append for Vec<T> {
    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

/// Joins two generators' outputs with an injected separator between them
///
/// The left operand samples first, then the right; the separator is a fixed
/// value cloned into every result.
pub struct Concat<A: Generator, B> {
    first: A,
    second: B,
    separator: A::Output,
}

impl<A: Generator, B> Concat<A, B> {
    /// Join `first` and `second` around `separator`
    pub const fn new(first: A, second: B, separator: A::Output) -> Self {
        Self {
            first,
            second,
            separator,
        }
    }
}

impl<A, B> Generator for Concat<A, B>
where
    A: Generator,
    B: Generator<Output = A::Output>,
    A::Output: Append + Clone,
{
    type Output = A::Output;

    fn run(&self, source: &mut dyn RngCore) -> A::Output {
        let first = self.first.run(source);
        let second = self.second.run(source);
        first.append(self.separator.clone()).append(second)
    }
}
