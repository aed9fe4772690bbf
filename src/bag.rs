use crate::{tiles, Hand, Tile, TileList, BAG_LEN, HAND_LEN, UNIQUE_TILE_COPIED_COUNT};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. [Tiles](Tile) are
/// always drawn from the front.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TileBag {
    tiles: TileList,
}

impl TileBag {
    /// An empty bag. Call [TileBag::fill] to add the full set of [tiles](Tile).
    pub fn new() -> TileBag {
        TileBag {
            tiles: TileList::with_capacity(BAG_LEN),
        }
    }

    /// Clears the bag and then adds [`UNIQUE_TILE_COPIED_COUNT`] copies of every
    /// [tile](Tile) variant in color then shape order, `108` [tiles](Tile) in total.
    pub fn fill(&mut self) {
        self.tiles.clear();
        self.tiles.extend(
            tiles()
                .into_iter()
                .flat_map(|tile| [tile; UNIQUE_TILE_COPIED_COUNT]),
        );
    }

    /// Rearranges the [tiles](Tile) into a uniformly random order with the thread local
    /// random number generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Rearranges the [tiles](Tile) into a uniformly random order with `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut tiles = self.tiles.iter().copied().collect_vec();
        tiles.shuffle(rng);
        self.tiles.clear();
        self.tiles.extend(tiles);
    }

    /// Removes and returns the front [tile](Tile) or [None] if the bag is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.remove_front().ok()
    }

    /// Removes the front [`HAND_LEN`] [tiles](Tile) and returns them as a new [Hand]. When
    /// fewer [tiles](Tile) remain, the hand holds all of them and the bag is left empty.
    pub fn draw_hand(&mut self) -> Hand {
        let mut hand = Hand::new();
        while hand.len() < HAND_LEN {
            let Some(tile) = self.draw() else {
                tracing::warn!(hand_len = hand.len(), "bag emptied while drawing a hand");
                break;
            };
            hand.add_tile(tile);
        }
        hand
    }

    /// Puts `tile` back at the end of the bag.
    pub fn return_tile(&mut self, tile: Tile) {
        self.tiles.add_back(tile);
    }

    /// The number of [tiles](Tile) left in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no [tiles](Tile) are left in the bag.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) left in the bag, front first.
    pub fn tiles(&self) -> &TileList {
        &self.tiles
    }
}

/// Builds a bag from externally restored [tiles](Tile), front first.
impl FromIterator<Tile> for TileBag {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> TileBag {
        TileBag {
            tiles: iter.into_iter().collect(),
        }
    }
}
