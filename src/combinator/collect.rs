//! Homogeneous N-ary zip over a vector of generators

use crate::generator::Generator;
use rand::RngCore;

/// Samples every generator in a vector, in order, collecting the results
///
/// The homogeneous companion of the fixed-arity zips: one entry per
/// generator, positions preserved.
#[derive(Clone, Debug)]
pub struct Collect<G> {
    generators: Vec<G>,
}

impl<G> Collect<G> {
    /// Group an arbitrary number of same-typed generators
    pub const fn new(generators: Vec<G>) -> Self {
        Self { generators }
    }
}

impl<G: Generator> Generator for Collect<G> {
    type Output = Vec<G::Output>;

    fn run(&self, source: &mut dyn RngCore) -> Vec<G::Output> {
        self.generators
            .iter()
            .map(|generator| generator.run(source))
            .collect()
    }
}

/// Sample every generator in `generators` in order, collecting the results
pub const fn collect<G: Generator>(generators: Vec<G>) -> Collect<G> {
    Collect::new(generators)
}
