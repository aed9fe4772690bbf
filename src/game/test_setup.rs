use crate::{
    random_bag, random_current_player, random_hand, random_score, Board, Coordinate,
    GameSession, Hand, Player, PlayerId, Tile, TileBag,
};
use rand::Rng;

impl GameSession {
    /// Generates an empty [GameSession].
    ///
    /// # Returns
    ///
    /// A [GameSession] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `board`: An empty board.
    /// * `players`: `ALICE` and `BOB` with empty hands and scores of `0`.
    /// * `current_player`: [PlayerId::One].
    pub fn empty_session() -> GameSession {
        GameSession {
            bag: TileBag::new(),
            board: Board::new(),
            players: [
                Player::new("ALICE", Hand::new()),
                Player::new("BOB", Hand::new()),
            ],
            current_player: PlayerId::One,
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut TileBag {
        &mut self.bag
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut [Player; 2] {
        &mut self.players
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut PlayerId {
        &mut self.current_player
    }

    /// Replaces the hand of the current player with `tiles`.
    pub fn set_current_hand(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        *self.players[self.current_player.index()].hand_mut() = tiles.into_iter().collect();
    }

    /// Places each of `tiles` on the board without checking the rules of the game.
    pub fn set_board(&mut self, tiles: impl IntoIterator<Item = (Coordinate, Tile)>) {
        for (coordinate, tile) in tiles {
            self.board
                .place_tile(tile, coordinate)
                .expect("test coordinates should be inside the limit");
        }
    }

    /// It inserts a random, small, non-zero number of [tiles](Tile) into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
    }

    /// Adds a random, small, non-zero number of [tiles](Tile) into each player's hand.
    pub fn random_hands<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for player in &mut self.players {
            random_hand(rng, player.hand_mut());
        }
    }

    /// Sets each player's score to a random, medium, non-zero number.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for player in &mut self.players {
            player.set_score(random_score(rng));
        }
    }

    /// Sets the current player to either player.
    ///
    /// # Returns
    ///
    /// The player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PlayerId {
        self.current_player = random_current_player(rng);
        self.current_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session() {
        let session = GameSession::empty_session();

        assert!(session.bag.is_empty());
        assert!(session.board.is_empty());
        for player in &session.players {
            assert!(player.hand().is_empty());
            assert_eq!(0, player.score());
        }
        assert_eq!(PlayerId::One, session.current_player);
    }

    #[test]
    fn random_session() {
        let mut rng = rand::thread_rng();
        let mut session = GameSession::empty_session();

        let bag_len = session.random_bag(&mut rng);
        session.random_hands(&mut rng);
        session.random_scores(&mut rng);
        let current_player = session.random_current_player(&mut rng);

        assert_eq!(bag_len, session.bag.len());
        for player in &session.players {
            assert!(!player.hand().is_empty());
            assert!(player.score() > 0);
        }
        assert_eq!(current_player, session.current_player);
    }
}
