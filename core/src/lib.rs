#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use builder::*;
pub use clue::*;
pub use error::*;
pub use sampler::*;
pub use session::*;

mod board;
mod builder;
mod clue;
mod error;
mod sampler;
mod session;

/// Number of category columns on a board.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clue rows under each category.
pub const CLUES_PER_CATEGORY: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl BoardConfig {
    pub const fn new(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(NUM_CATEGORIES, CLUES_PER_CATEGORY)
    }
}
