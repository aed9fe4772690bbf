use crate::{adjacent_lines, Board, Coordinate, Hand, Lines, Player, PlayerId, TileBag};
pub use place::*;
use rand::Rng;
pub use replace::*;
use std::cmp::Ordering;
use tap::Tap;
pub use view::*;

mod place;
mod replace;
#[cfg(test)]
mod test_setup;
mod view;

/// Owns the state of one game between two players and implements the rules which advance it.
///
/// A session is created by [GameSession::begin] or [GameSession::load] and is then
/// advanced by [GameSession::place_tile] and [GameSession::replace_tile]. Every
/// [tile](crate::Tile) is always in exactly one of the bag, a hand, or the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameSession {
    /// This is a bag of all the tiles that haven't been drawn yet.
    bag: TileBag,
    /// This is a map of coordinates to tiles that have been placed.
    board: Board,
    /// Both players in turn order.
    players: [Player; 2],
    /// The player whose turn it is.
    current_player: PlayerId,
}

impl GameSession {
    /// Starts a new game with a filled and shuffled bag, a hand dealt to each player in turn
    /// order, and an empty board. `player1` takes the first turn.
    pub fn begin(player1: impl Into<String>, player2: impl Into<String>) -> GameSession {
        GameSession::begin_with_rng(player1, player2, &mut rand::thread_rng())
    }

    /// Same as [GameSession::begin] but shuffles the bag with `rng`.
    pub fn begin_with_rng<R: Rng + ?Sized>(
        player1: impl Into<String>,
        player2: impl Into<String>,
        rng: &mut R,
    ) -> GameSession {
        let mut bag = TileBag::new()
            .tap_mut(TileBag::fill)
            .tap_mut(|bag| bag.shuffle_with(rng));
        let hand1 = bag.draw_hand();
        let hand2 = bag.draw_hand();
        let session = GameSession {
            players: [Player::new(player1, hand1), Player::new(player2, hand2)],
            bag,
            board: Board::new(),
            current_player: PlayerId::One,
        };
        tracing::info!(
            player1 = session.players[0].name(),
            player2 = session.players[1].name(),
            bag_len = session.bag.len(),
            "game begun"
        );
        session
    }

    /// Restores a game from externally loaded parts. The parts are taken as given.
    pub fn load(
        player1: Player,
        player2: Player,
        bag: TileBag,
        board: Board,
        current_player: PlayerId,
    ) -> GameSession {
        tracing::info!(
            player1 = player1.name(),
            player2 = player2.name(),
            bag_len = bag.len(),
            board_len = board.len(),
            %current_player,
            "game loaded"
        );
        GameSession {
            bag,
            board,
            players: [player1, player2],
            current_player,
        }
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The [player](Player) identified by `id`.
    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Both [players](Player) in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The [tiles](crate::Tile) held by the player identified by `id`. Only that player
    /// should see it.
    pub fn get_hand(&self, id: PlayerId) -> &Hand {
        self.player(id).hand()
    }

    /// The [tiles](crate::Tile) that haven't been drawn yet.
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// The [tiles](crate::Tile) that have been placed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Passes the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Whether the bag is empty and some player's hand is empty.
    pub fn has_ended(&self) -> bool {
        self.bag.is_empty() && self.players.iter().any(|player| player.hand().is_empty())
    }

    /// The player with the higher score or [None] on a tie.
    pub fn winner(&self) -> Option<PlayerId> {
        let [player1, player2] = &self.players;
        match player1.score().cmp(&player2.score()) {
            Ordering::Greater => Some(PlayerId::One),
            Ordering::Less => Some(PlayerId::Two),
            Ordering::Equal => None,
        }
    }

    /// The number of [tiles](crate::Tile) in the bag, both hands, and the board together.
    /// Never changes during a game.
    pub fn tile_count(&self) -> usize {
        self.bag.len()
            + self
                .players
                .iter()
                .map(|player| player.hand().len())
                .sum::<usize>()
            + self.board.len()
    }

    /// The [lines](Lines) a [tile](crate::Tile) placed at `coordinate` would join.
    pub fn adjacent_lines(&self, coordinate: Coordinate) -> Lines {
        adjacent_lines(&self.board, coordinate)
    }
}
