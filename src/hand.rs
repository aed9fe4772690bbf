use crate::{Tile, TileBag, TileList, HAND_LEN};
use std::fmt;

/// A player's private, ordered collection of [tiles](Tile). Duplicate [tiles](Tile) are legal.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Hand {
    tiles: TileList,
}

/// Describes the reason why a [Hand] operation could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum HandError {
    /// Attempting to take a [tile](Tile) which is not in the hand.
    NotFound {
        /// The requested [tile](Tile).
        tile: Tile,
    },
    /// Attempting to replace a [tile](Tile) with one from an empty bag.
    BagEmpty,
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::NotFound { tile } => write!(f, "{tile} is not in the hand"),
            HandError::BagEmpty => write!(f, "the bag is empty"),
        }
    }
}

impl std::error::Error for HandError {}

impl Hand {
    /// An empty hand.
    pub fn new() -> Hand {
        Hand {
            tiles: TileList::with_capacity(HAND_LEN),
        }
    }

    /// Removes one [tile](Tile) equal to `tile` and returns it for placement.
    ///
    /// # Errors
    ///
    /// * [HandError::NotFound] when no [tile](Tile) in the hand is equal to `tile`.
    pub fn play_tile(&mut self, tile: &Tile) -> Result<Tile, HandError> {
        let index = self.index_of(tile)?;
        self.tiles
            .remove_at(index)
            .map_err(|_| HandError::NotFound { tile: *tile })
    }

    /// Adds a drawn `tile` at the end of the hand.
    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.add_back(tile);
    }

    /// Puts the front [tile](Tile) of `bag` where `tile` was in the hand and then
    /// returns `tile` to the back of `bag`. Nothing changes when either check fails.
    ///
    /// # Errors
    ///
    /// * [HandError::NotFound] when no [tile](Tile) in the hand is equal to `tile`.
    /// * [HandError::BagEmpty] when there is nothing to draw from `bag`.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) drawn from `bag`.
    pub fn replace_tile(&mut self, tile: &Tile, bag: &mut TileBag) -> Result<Tile, HandError> {
        let index = self.index_of(tile)?;
        let drawn = bag.draw().ok_or(HandError::BagEmpty)?;
        let replaced = match self.tiles.insert(drawn, index, true) {
            Ok(Some(replaced)) => replaced,
            result => {
                dbg!(index, &result);
                unreachable!("index ({index:?}) was just found in the hand.")
            }
        };
        bag.return_tile(replaced);
        Ok(drawn)
    }

    /// Whether the hand holds a [tile](Tile) equal to `tile`.
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    /// The number of [tiles](Tile) in the hand.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the hand holds no [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) in the hand in the order they were added.
    pub fn tiles(&self) -> &TileList {
        &self.tiles
    }

    fn index_of(&self, tile: &Tile) -> Result<usize, HandError> {
        self.tiles
            .position(tile)
            .ok_or(HandError::NotFound { tile: *tile })
    }
}

/// Builds a hand from externally restored [tiles](Tile).
impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Hand {
        Hand {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tiles)
    }
}
