//! Type-erased generator handle

use crate::generator::Generator;
use rand::RngCore;

/// A fixed-size handle hiding a generator's concrete composed type
///
/// Stores the generation logic as a boxed closure over the entropy source.
/// Use it to keep generators of one output type in a single collection, or
/// to return a pipeline from a function without spelling out its type.
///
/// ```
/// use rand::SeedableRng;
/// use randkit::{BoxedGenerator, Generator, Lcg, boolean, int_in};
///
/// let pool: Vec<BoxedGenerator<u32>> = vec![
///     int_in(1_u32, 10).boxed(),
///     boolean().map(u32::from).boxed(),
/// ];
/// let mut source = Lcg::seed_from_u64(42);
/// let values: Vec<u32> = pool.iter().map(|g| g.run(&mut source)).collect();
/// assert_eq!(values, vec![6, 1]);
/// ```
pub struct BoxedGenerator<T> {
    produce: Box<dyn Fn(&mut dyn RngCore) -> T + Send + Sync>,
}

impl<T> BoxedGenerator<T> {
    /// Erase `generator` behind this handle
    pub fn new<G>(generator: G) -> Self
    where
        G: Generator<Output = T> + Send + Sync + 'static,
    {
        Self {
            produce: Box::new(move |source| generator.run(source)),
        }
    }

    /// Build a generator directly from a sampling closure
    pub fn from_fn<F>(produce: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> T + Send + Sync + 'static,
    {
        Self {
            produce: Box::new(produce),
        }
    }
}

impl<T> Generator for BoxedGenerator<T> {
    type Output = T;

    fn run(&self, source: &mut dyn RngCore) -> T {
        (self.produce)(source)
    }
}
