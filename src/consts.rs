use konst::primitive::{parse_isize, parse_usize};
use konst::{option, result};

/// The number of copies of each unique [tile](crate::Tile) in the bag. `3` copies.
///
/// # See Also
///
/// * [BAG_LEN](crate::BAG_LEN)
/// * [TileBag::fill](crate::TileBag::fill)
pub const UNIQUE_TILE_COPIED_COUNT: usize = 3;
/// The number of [tiles](crate::Tile) dealt to each player at the start of the game.
/// `6` [tiles](crate::Tile) per hand.
///
/// # See Also
///
/// * [TileBag::draw_hand](crate::TileBag::draw_hand)
pub const HAND_LEN: usize = 6;
/// The maximum number of [tiles](crate::Tile) in a line on the board. A line which already
/// holds `6` [tiles](crate::Tile) cannot accept another.
///
/// # See Also
///
/// * [check_tile_on_lines](crate::check_tile_on_lines)
/// * [LineScores](crate::LineScores)
pub const MAX_LINE_LEN: usize = 6;
/// The amount of extra points given once for each line completed as a Qwirkle and once
/// when the player who placed the [tile](crate::Tile) empties their hand. `6` additional points.
///
/// # See Also
///
/// * [GameSession::place_tile](crate::GameSession::place_tile)
pub const SCORE_BONUS: usize = 6;
/// The score set for the player who places the very first [tile](crate::Tile) of the game.
/// `1` point. The score is overwritten rather than raised, so a
/// [loaded](crate::GameSession::load) game with an empty board and a higher score loses it.
pub const FIRST_PLACEMENT_SCORE: usize = 1;
/// The exclusive maximum absolute value of a component in a [coordinate](crate::Coordinate).
/// If the environment variable named `COORDINATE_LIMIT` is present at compile time,
/// is able to be parsed into a `isize`, is not `0` and is not [isize::MAX],
/// set to the saturating absolute value of the environment variable.
/// Otherwise, it is set to `10_000`.
///
/// The board is conceptually unbounded, but a limit keeps every step of a line walk
/// away from overflow.
///
/// # Panics
///
/// * When the given value is `0`, [isize::MIN], [isize::MIN] `+ 1` or [isize::MAX]
///
/// # See Also
///
/// * [Board::at](crate::Board::at)
pub const COORDINATE_LIMIT: isize = option::unwrap_or!(
    option::and_then!(option_env!("COORDINATE_LIMIT"), |str| result::ok!(
        parse_isize(str)
    )),
    10_000
)
.saturating_abs();
const _: () = assert!(COORDINATE_LIMIT > 0);
// cannot use assert_ne! in a const context
//noinspection RsAssertEqual
const _: () = assert!(COORDINATE_LIMIT != isize::MAX);
/// All notifications produced by a single action will be stored on the stack until
/// the number of notifications becomes greater than `NOTIFICATION_CAPACITY`. If the environment
/// variable named `NOTIFICATION_CAPACITY` is present at compile time and is able to be parsed
/// into a `usize`, set to the value of the environment variable. Otherwise, it is set to `4`,
/// enough for two Qwirkles, a success, and a game over.
///
/// # See Also
///
/// * [Notifications](crate::Notifications)
pub const NOTIFICATION_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("NOTIFICATION_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
