//! Uniform element selection from generated collections

use crate::generator::Generator;
use crate::generator::always::Always;
use crate::source::uniform::draw_below;
use rand::RngCore;

/// Draws one uniformly random element from each generated collection
///
/// The upstream collection is generated first, then a single bounded index
/// draw selects the element. An empty collection yields `None`.
#[derive(Clone, Copy, Debug)]
pub struct Element<G> {
    upstream: G,
}

impl<G> Element<G> {
    /// Select one element per run from `upstream`'s output
    pub const fn new(upstream: G) -> Self {
        Self { upstream }
    }
}

impl<G, T> Generator for Element<G>
where
    G: Generator<Output = Vec<T>>,
{
    type Output = Option<T>;

    fn run(&self, source: &mut dyn RngCore) -> Option<T> {
        let mut items = self.upstream.run(source);
        if items.is_empty() {
            return None;
        }
        let index = draw_below(source, items.len() as u64) as usize;
        Some(items.swap_remove(index))
    }
}

/// Draw one uniformly random element of `items` per run
///
/// Convenience for selection from a fixed collection; an empty `items`
/// always yields `None`.
pub fn element_of<T: Clone>(items: Vec<T>) -> Element<Always<Vec<T>>> {
    Element::new(Always::new(items))
}
