use crate::{Board, GameSession, PlayerId};

/// Immutably borrows the publicly visible properties of a [GameSession]. Hands are
/// replaced by their lengths.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameView<'a> {
    /// The number of tiles that haven't been drawn yet.
    pub bag_len: usize,
    /// This is a map of coordinates to tiles that have been placed.
    pub board: &'a Board,
    /// Each player's name in turn order.
    pub names: [&'a str; 2],
    /// Each player's score in turn order.
    pub scores: [usize; 2],
    /// The number of tiles in each player's hand in turn order.
    pub hand_lens: [usize; 2],
    /// The player whose turn it is.
    pub current_player: PlayerId,
    /// Whether the game has ended.
    pub has_ended: bool,
}

impl GameSession {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`GameSession`], but
    /// with the bag replaced by its length and hands replaced by the number
    /// of tiles in each hand.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            bag_len: self.bag.len(),
            board: &self.board,
            names: PlayerId::PLAYERS.map(|id| self.player(id).name()),
            scores: PlayerId::PLAYERS.map(|id| self.player(id).score()),
            hand_lens: PlayerId::PLAYERS.map(|id| self.get_hand(id).len()),
            current_player: self.current_player,
            has_ended: self.has_ended(),
        }
    }
}
