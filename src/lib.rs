//! Concrete structs to represent and protect the state of a two player game of Qwirkle with
//! methods to advance the game one turn at a time.
//!
//! ## Summary
//!
//! Each player holds a [hand](Hand) of up to [`HAND_LEN`] [tiles](Tile) drawn from a
//! [bag](TileBag) of [`BAG_LEN`] [tiles](Tile). Players take turns to advance the game by
//! either [placing](GameSession::place_tile) a single [tile](Tile) on the [board](Board) or
//! [replacing](GameSession::replace_tile) a single [tile](Tile) with one from the bag.
//! Players earn points by placing [tiles](Tile) in lines which match each other by either
//! [shape](Shape) or [color](Color). The game ends when the bag is empty and some player's
//! hand is empty. The player with the most points wins.
//!
//! ## What are the phases of the game?
//!
//! * `NotStarted`: No game has begun.
//! * `InProgress`: The players are taking turns.
//! * `Ended`: The bag and some player's hand are empty.
//!
//! Represented by [Phase] and tracked by [GameManager].
//!
//! ## How is the game created?
//!
//! [GameSession::begin] fills and shuffles the bag, deals a hand to each player, and gives the
//! first turn to [PlayerId::One]. [GameSession::load] restores a saved game from its parts.
//! [GameManager::begin_game] and [GameManager::load_game] wrap both for callers which want
//! [notifications](Notification) instead of return values.
//!
//! ### How are tiles placed?
//!
//! The placed [tile](Tile) must be in the current player's hand, its cell must be empty, it must
//! touch another [tile](Tile) unless the board is empty, and it must
//! [join its lines](check_tile_on_lines). The [tile](Tile) moves from the hand to the board, the
//! front of the bag is drawn into the hand, the current player earns points, and the turn passes
//! to the other player.
//!
//! ### How are tiles replaced?
//!
//! After the first placement, the current player may swap a [tile](Tile) from their hand with
//! the front of the bag. The replaced [tile](Tile) goes to the back of the bag, the drawn
//! [tile](Tile) takes its position in the hand, and the turn passes to the other player.
//!
//! ## How are points calculated?
//!
//! Each line the placed [tile](Tile) joins earns its length including the placed [tile](Tile).
//! A line of [`MAX_LINE_LEN`] [tiles](Tile) is a Qwirkle and earns an extra
//! [bonus](SCORE_BONUS). Emptying the hand earns another [bonus](SCORE_BONUS). The first
//! placement of the game sets the score to [`FIRST_PLACEMENT_SCORE`] before points are added.
//!
//! ## How is the game viewed?
//!
//! [GameSession::view] returns an immutable [GameView] of the state visible to all players.
//! [GameSession::get_hand] shares private information for each individual player.
//!
//! ## How is the game run?
//!
//! [run_game] drives a [GameSession] to its end through two [clients](Client), asking the
//! current player for an [Action] and broadcasting views with `futures`.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to [GameSession] to get mutable references to its
//! properties and helper functions to add random data to them.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game::*;
pub use hand::*;
pub use line::*;
pub use manager::*;
pub use notification::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use tile::*;
pub use tile_list::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod game;
mod hand;
mod line;
mod manager;
mod notification;
mod player;
#[cfg(test)]
mod random;
mod runtime;
mod tile;
mod tile_list;
