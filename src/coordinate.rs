use crate::COORDINATE_LIMIT;
use std::cmp;

/// A tuple with two integer components for the row and column position on the board.
/// Rows grow downwards and columns grow to the right.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [GameSession::place_tile](crate::GameSession::place_tile)
pub type Coordinate = (isize, isize);

/// One of the four directions a line is walked from a target cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards smaller rows.
    Up,
    /// Towards larger rows.
    Down,
    /// Towards smaller columns.
    Left,
    /// Towards larger columns.
    Right,
}

impl Direction {
    /// The directions which make up a vertical line, in walking order.
    pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];
    /// The directions which make up a horizontal line, in walking order.
    pub const HORIZONTAL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Moves `(row, column)` one cell in this direction. If a component would overflow,
    /// [None] is returned.
    pub fn step(self, (row, column): Coordinate) -> Option<Coordinate> {
        match self {
            Direction::Up => Some((row.checked_sub(1)?, column)),
            Direction::Down => Some((row.checked_add(1)?, column)),
            Direction::Left => Some((row, column.checked_sub(1)?)),
            Direction::Right => Some((row, column.checked_add(1)?)),
        }
    }
}

/// Whether both components of `coordinate` are strictly inside the
/// [coordinate limit](COORDINATE_LIMIT).
#[inline]
pub fn is_within_limit((row, column): Coordinate) -> bool {
    -COORDINATE_LIMIT < row
        && row < COORDINATE_LIMIT
        && -COORDINATE_LIMIT < column
        && column < COORDINATE_LIMIT
}

/// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
/// If `coordinates` is empty, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # See Also
///
/// * [Board::extent](crate::Board::extent)
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row
/// * The minimum column
/// * The maximum row
/// * The maximum column
pub fn find_component_minimums_and_maximums(
    mut coordinates: impl Iterator<Item = Coordinate>,
) -> Option<(isize, isize, isize, isize)> {
    let (row, column) = coordinates.next()?;

    let (mut min_row, mut min_column, mut max_row, mut max_column) = (row, column, row, column);

    for (row, column) in coordinates {
        (min_row, min_column) = (cmp::min(min_row, row), cmp::min(min_column, column));
        (max_row, max_column) = (cmp::max(max_row, row), cmp::max(max_column, column));
    }

    Some((min_row, min_column, max_row, max_column))
}
