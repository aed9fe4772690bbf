use crate::{Board, Coordinate, Direction, Tile, TileList, MAX_LINE_LEN};
use itertools::FoldWhile::{Continue, Done};
use itertools::Itertools;
use std::{fmt, iter};

/// The [tiles](Tile) already on the board in line with a target cell, without the
/// target cell itself.
///
/// `vertical` holds the [up](Direction::Up) walk followed by the [down](Direction::Down) walk.
/// `horizontal` holds the [left](Direction::Left) walk followed by the
/// [right](Direction::Right) walk. Each walk is ordered from the target cell outwards.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Lines {
    /// The row through the target cell.
    pub horizontal: TileList,
    /// The column through the target cell.
    pub vertical: TileList,
}

impl Lines {
    /// Whether neither line holds any [tile](Tile), so the target cell has no neighbours.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// Walks outwards from `coordinate` in each [direction](Direction) one cell at a time and
/// collects consecutive occupied cells. A walk stops at the first empty cell or at the edge of
/// the board.
///
/// # See Also
///
/// * [GameSession::adjacent_lines](crate::GameSession::adjacent_lines)
pub fn adjacent_lines(board: &Board, coordinate: Coordinate) -> Lines {
    let walk = move |directions: [Direction; 2]| -> TileList {
        directions
            .into_iter()
            .flat_map(move |direction| {
                iter::successors(direction.step(coordinate), move |&next| direction.step(next))
                    .map(move |next| board.at(next).ok().flatten().copied())
                    .while_some()
            })
            .collect()
    };

    Lines {
        horizontal: walk(Direction::HORIZONTAL),
        vertical: walk(Direction::VERTICAL),
    }
}

/// Describes the reason why a [tile](Tile) cannot join its [lines](Lines).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineViolation {
    /// The [tile](Tile) is already in one of the lines.
    Duplicate,
    /// The [tile](Tile) shares neither [color](crate::Color) nor [shape](crate::Shape)
    /// with one of the lines.
    Mismatch,
    /// One of the lines already holds [`MAX_LINE_LEN`] [tiles](Tile).
    TooLong,
}

impl fmt::Display for LineViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineViolation::Duplicate => write!(f, "the tile is already in the line"),
            LineViolation::Mismatch => write!(f, "the tile matches neither color nor shape"),
            LineViolation::TooLong => write!(f, "the line is full"),
        }
    }
}

impl std::error::Error for LineViolation {}

/// Checks whether `tile` may join both `lines`. Empty lines impose no constraint.
///
/// # Errors
///
/// In the order they are checked:
///
/// * [LineViolation::Duplicate] when either line already holds a [tile](Tile) equal to `tile`.
/// * [LineViolation::Mismatch] when `tile` shares neither [color](crate::Color) nor
/// [shape](crate::Shape) with either line.
/// * [LineViolation::TooLong] when either line already holds [`MAX_LINE_LEN`] or more
/// [tiles](Tile).
///
/// # See Also
///
/// * [GameSession::place_tile](crate::GameSession::place_tile)
pub fn check_tile_on_lines(tile: &Tile, lines: &Lines) -> Result<(), LineViolation> {
    let Lines {
        horizontal,
        vertical,
    } = lines;

    if horizontal.contains(tile) || vertical.contains(tile) {
        return Err(LineViolation::Duplicate);
    }
    if !matches_line(tile, horizontal) || !matches_line(tile, vertical) {
        return Err(LineViolation::Mismatch);
    }
    if horizontal.len() >= MAX_LINE_LEN || vertical.len() >= MAX_LINE_LEN {
        return Err(LineViolation::TooLong);
    }

    Ok(())
}

/// Compares `tile` with the first `2` [tiles](Tile) of `line` only. A line made of one run
/// shares one attribute without duplicates, so this decides the match. A line bridging two
/// runs holds the walk towards [up](Direction::Up) or [left](Direction::Left) first, and the
/// run on the other side is not compared when the first walk holds `2` or more [tiles](Tile).
fn matches_line(tile: &Tile, line: &TileList) -> bool {
    let (same_color, same_shape) = line
        .iter()
        .take(2)
        .fold_while((true, true), |(same_color, same_shape), other| {
            let same = (
                same_color && tile.has_same_color(other),
                same_shape && tile.has_same_shape(other),
            );
            match same {
                (false, false) => Done(same),
                _ => Continue(same),
            }
        })
        .into_inner();
    same_color || same_shape
}

/// The points earned by each line formed by a placement, before bonuses.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct LineScores {
    /// `0` if the horizontal line is empty, otherwise its length including the placed
    /// [tile](Tile).
    pub horizontal: usize,
    /// `0` if the vertical line is empty, otherwise its length including the placed
    /// [tile](Tile).
    pub vertical: usize,
}

impl LineScores {
    /// Scores each of `lines` as if the placed [tile](Tile) had joined it.
    pub fn new(lines: &Lines) -> LineScores {
        fn score(line: &TileList) -> usize {
            match line.len() {
                0 => 0,
                len => len + 1,
            }
        }

        LineScores {
            horizontal: score(&lines.horizontal),
            vertical: score(&lines.vertical),
        }
    }

    /// The number of lines completed as a Qwirkle, a line of [`MAX_LINE_LEN`]
    /// [tiles](Tile). Between `0` and `2`.
    pub fn qwirkles(&self) -> usize {
        [self.horizontal, self.vertical]
            .into_iter()
            .filter(|&score| score == MAX_LINE_LEN)
            .count()
    }

    /// The sum of both line scores.
    pub fn total(&self) -> usize {
        self.horizontal + self.vertical
    }
}
