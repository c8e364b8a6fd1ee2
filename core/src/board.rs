use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

/// Position of a clue as `(category_index, clue_index)`.
pub type ClueCoords = (usize, usize);

/// Conversion between clue coordinates and the `"<category>-<clue>"` cell id
/// used by the display.
pub trait ToCellId {
    fn to_cell_id(self) -> String;
}

impl ToCellId for ClueCoords {
    fn to_cell_id(self) -> String {
        format!("{}-{}", self.0, self.1)
    }
}

pub fn parse_cell_id(id: &str) -> Result<ClueCoords> {
    let (category, clue) = id.split_once('-').ok_or(GameError::InvalidCellId)?;
    Ok((parse_index(category)?, parse_index(clue)?))
}

/// Plain decimal digits only, `usize::from_str` alone would also take a sign.
fn parse_index(digits: &str) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidCellId);
    }
    digits.parse().map_err(|_| GameError::InvalidCellId)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Length of the longest category, which is the number of rows to render.
    pub fn row_count(&self) -> usize {
        self.categories.iter().map(Category::clue_count).max().unwrap_or(0)
    }

    pub fn validate_coords(&self, coords: ClueCoords) -> Result<ClueCoords> {
        let (category, clue) = coords;
        match self.categories.get(category) {
            Some(cat) if clue < cat.clue_count() => Ok(coords),
            _ => Err(GameError::InvalidCoords),
        }
    }

    pub fn clue_at(&self, coords: ClueCoords) -> Result<&Clue> {
        self.validate_coords(coords).map(|coords| &self[coords])
    }

    pub fn clue_at_mut(&mut self, coords: ClueCoords) -> Result<&mut Clue> {
        self.validate_coords(coords)?;
        Ok(&mut self[coords])
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = ClueCoords> + '_ {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(x, cat)| (0..cat.clue_count()).map(move |y| (x, y)))
    }

    /// Whether every clue on the board shows its answer.
    pub fn is_fully_revealed(&self) -> bool {
        self.iter_coords()
            .all(|coords| self[coords].showing().is_finished())
    }
}

impl Index<ClueCoords> for Board {
    type Output = Clue;

    fn index(&self, (category, clue): ClueCoords) -> &Self::Output {
        &self.categories[category].clues[clue]
    }
}

impl IndexMut<ClueCoords> for Board {
    fn index_mut(&mut self, (category, clue): ClueCoords) -> &mut Self::Output {
        &mut self.categories[category].clues[clue]
    }
}
