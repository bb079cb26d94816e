//! The attempt-bounded state machine and its fallback policy

use crate::generator::Generator;
use rand::RngCore;

/// Policy applied when an attempt budget is exhausted
///
/// Chosen at construction time; exhaustion is resolved deterministically and
/// is never an error.
pub enum Fallback<T> {
    /// Return the final condition-failing sample
    UseLast,
    /// Return a fixed default value
    UseDefault(T),
    /// Keep sampling with no bound
    ///
    /// If the condition can never be satisfied this never terminates; the
    /// hazard is the caller's to avoid.
    KeepTrying,
    /// Return the result of a caller-supplied thunk
    Delegate(Box<dyn Fn() -> T + Send + Sync>),
}

/// Bounds a generator to a maximum number of sampling attempts
///
/// Each run samples the upstream and tests the condition, up to
/// `max_attempts` total samples. The first satisfying sample returns
/// immediately, so zero retries occur when the upstream cooperates; once the
/// budget is spent the [`Fallback`] decides the result.
pub struct AttemptBounded<G: Generator, P> {
    upstream: G,
    condition: P,
    max_attempts: usize,
    fallback: Fallback<G::Output>,
}

impl<G: Generator, P> AttemptBounded<G, P> {
    /// Bound `upstream` to `max_attempts` samples against `condition`
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    pub fn new(
        upstream: G,
        max_attempts: usize,
        condition: P,
        fallback: Fallback<G::Output>,
    ) -> Self {
        assert!(max_attempts > 0, "attempt bound must be at least one");
        Self {
            upstream,
            condition,
            max_attempts,
            fallback,
        }
    }
}

impl<G, P> Generator for AttemptBounded<G, P>
where
    G: Generator,
    G::Output: Clone,
    P: Fn(&G::Output) -> bool,
{
    type Output = G::Output;

    fn run(&self, source: &mut dyn RngCore) -> G::Output {
        let mut value = self.upstream.run(source);
        let mut attempts = 1;
        while !(self.condition)(&value) && attempts < self.max_attempts {
            value = self.upstream.run(source);
            attempts += 1;
        }
        if (self.condition)(&value) {
            return value;
        }
        match &self.fallback {
            Fallback::UseLast => value,
            Fallback::UseDefault(default) => default.clone(),
            Fallback::KeepTrying => loop {
                let candidate = self.upstream.run(source);
                if (self.condition)(&candidate) {
                    return candidate;
                }
            },
            Fallback::Delegate(thunk) => thunk(),
        }
    }
}
