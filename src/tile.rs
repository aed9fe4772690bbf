use crate::UNIQUE_TILE_COPIED_COUNT;
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The number of [`Tile`] variants. 36 tiles from 6 colors and 6 shapes.
pub const TILES_LEN: usize = Color::COLORS_LEN * Shape::SHAPES_LEN;
/// The number of [tiles](Tile) in a full bag. 3 copies of each of the 36 variants.
pub const BAG_LEN: usize = TILES_LEN * UNIQUE_TILE_COPIED_COUNT;

/// Describes a tile with [`Color`] and [`Shape`] in a game. Tiles are plain values,
/// so moving a tile between the bag, a hand, and the board copies it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    /// The color printed on the tile.
    pub color: Color,
    /// The shape printed on the tile.
    pub shape: Shape,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] with `color` and `shape`.
    #[inline]
    pub const fn new(color: Color, shape: Shape) -> Tile {
        Tile { color, shape }
    }

    /// Whether both tiles share a [`Color`] regardless of [`Shape`].
    #[inline]
    pub fn has_same_color(&self, other: &Tile) -> bool {
        self.color == other.color
    }

    /// Whether both tiles share a [`Shape`] regardless of [`Color`].
    #[inline]
    pub fn has_same_shape(&self, other: &Tile) -> bool {
        self.shape == other.shape
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.shape)
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in color then shape order.
#[inline]
pub fn tiles() -> [Tile; TILES_LEN] {
    let mut tiles = [Tile::new(Color::Red, Shape::Circle); TILES_LEN];
    for (index, tile) in tiles.iter_mut().enumerate() {
        *tile = Tile::new(
            Color::colors()[index / Shape::SHAPES_LEN],
            Shape::shapes()[index % Shape::SHAPES_LEN],
        );
    }
    tiles
}

/// Describes the color on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Color {
    /// `0`, printed as `R`.
    Red = 0,
    /// `1`, printed as `O`.
    Orange = 1,
    /// `2`, printed as `Y`.
    Yellow = 2,
    /// `3`, printed as `G`.
    Green = 3,
    /// `4`, printed as `B`.
    Blue = 4,
    /// `5`, printed as `P`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
        ]
    }

    /// The single letter used for the color in tile codes such as `R1`.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Purple => 'P',
        }
    }

    /// The inverse of [`Color::symbol`]. Returns [None] for any other character.
    pub fn from_symbol(symbol: char) -> Option<Color> {
        Color::colors()
            .into_iter()
            .find(|color| color.symbol() == symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Color::COLORS_LEN);
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the shape on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Shape {
    /// `0`, printed as `1`.
    Circle = 0,
    /// `1`, printed as `2`.
    Star4 = 1,
    /// `2`, printed as `3`.
    Diamond = 2,
    /// `3`, printed as `4`.
    Square = 3,
    /// `4`, printed as `5`.
    Star6 = 4,
    /// `5`, printed as `6`.
    Clover = 5,
}

impl Shape {
    /// The number of [`Shape`] variants. 6 shapes.
    pub const SHAPES_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Shape`] variants in order.
    #[inline]
    pub fn shapes() -> [Shape; Shape::SHAPES_LEN] {
        [
            Shape::Circle,
            Shape::Star4,
            Shape::Diamond,
            Shape::Square,
            Shape::Star6,
            Shape::Clover,
        ]
    }

    /// The number used for the shape in tile codes such as `R1`, from `1` to `6`.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// The inverse of [`Shape::number`]. Returns [None] outside `1..=6`.
    pub fn from_number(number: u8) -> Option<Shape> {
        number
            .checked_sub(1)
            .and_then(num::FromPrimitive::from_u8)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Distribution<Shape> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let index = rng.gen_range(0..Shape::SHAPES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Shape::SHAPES_LEN);
            unreachable!(
                "index ({:?}) should be matched since shapes cover all indexes \
                in range 0..Shape::SHAPES_LEN (0..{:?}).",
                index,
                Shape::SHAPES_LEN
            );
        })
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}
