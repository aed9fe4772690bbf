use crate::{find_component_minimums_and_maximums, is_within_limit, Coordinate, Tile};
use std::collections::hash_map::Iter;
use std::collections::HashMap;
use std::fmt;

/// This is a map of [coordinates](Coordinate) to [tiles](Tile) that have been placed.
/// Each cell holds at most one [tile](Tile).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    cells: HashMap<Coordinate, Tile>,
}

/// Describes the reason why a [Board] cell could not be accessed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum BoardError {
    /// Attempting to access a cell on or outside the
    /// [coordinate limit](crate::COORDINATE_LIMIT).
    OutOfRange {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange {
                coordinate: (row, column),
            } => write!(f, "({row}, {column}) is outside the board"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Whether no [tile](Tile) has been placed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of placed [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Looks up the cell at `coordinate`.
    ///
    /// # Errors
    ///
    /// * [BoardError::OutOfRange] when `coordinate` is on or outside the
    /// [coordinate limit](crate::COORDINATE_LIMIT).
    ///
    /// # Returns
    ///
    /// The [tile](Tile) in the cell or [None] if the cell is empty.
    pub fn at(&self, coordinate: Coordinate) -> Result<Option<&Tile>, BoardError> {
        if !is_within_limit(coordinate) {
            return Err(BoardError::OutOfRange { coordinate });
        }
        Ok(self.cells.get(&coordinate))
    }

    /// Writes `tile` into the cell at `coordinate` without checking the rules of the game.
    /// Any [tile](Tile) already in the cell is overwritten.
    ///
    /// # Errors
    ///
    /// * [BoardError::OutOfRange] when `coordinate` is on or outside the
    /// [coordinate limit](crate::COORDINATE_LIMIT).
    pub fn place_tile(&mut self, tile: Tile, coordinate: Coordinate) -> Result<(), BoardError> {
        if !is_within_limit(coordinate) {
            return Err(BoardError::OutOfRange { coordinate });
        }
        self.cells.insert(coordinate, tile);
        Ok(())
    }

    /// The smallest rectangle around every placed [tile](Tile) as
    /// `(min row, min column, max row, max column)` or [None] if the board is empty.
    pub fn extent(&self) -> Option<(isize, isize, isize, isize)> {
        find_component_minimums_and_maximums(self.cells.keys().copied())
    }

    /// Every placed [tile](Tile) with its [coordinate](Coordinate) in arbitrary order.
    pub fn iter(&self) -> Iter<'_, Coordinate, Tile> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (&'a Coordinate, &'a Tile);
    type IntoIter = Iter<'a, Coordinate, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a board from externally restored cells.
impl FromIterator<(Coordinate, Tile)> for Board {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Tile)>>(iter: I) -> Board {
        Board {
            cells: iter.into_iter().collect(),
        }
    }
}
