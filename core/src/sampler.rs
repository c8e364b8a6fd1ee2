use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Uniform selection without replacement.
///
/// Selection is done over positions rather than values, so two equal items
/// at different positions are still two distinct candidates, and the cost is
/// bounded by the pool size no matter how close `n` gets to it.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks `n` distinct positions out of `0..len`, in random order.
    pub fn sample_indices(&mut self, len: usize, n: usize) -> Result<Vec<usize>> {
        if n > len {
            return Err(GameError::InsufficientItems {
                requested: n,
                available: len,
            });
        }
        Ok(rand::seq::index::sample(&mut self.rng, len, n).into_vec())
    }

    pub fn sample<T: Clone>(&mut self, items: &[T], n: usize) -> Result<Vec<T>> {
        let indices = self.sample_indices(items.len(), n)?;
        Ok(indices.into_iter().map(|i| items[i].clone()).collect())
    }

    /// Same as [`Sampler::sample`] but moves the chosen items out of `items`.
    pub fn sample_owned<T>(&mut self, items: Vec<T>, n: usize) -> Result<Vec<T>> {
        let indices = self.sample_indices(items.len(), n)?;
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Ok(indices.into_iter().filter_map(|i| slots[i].take()).collect())
    }
}
