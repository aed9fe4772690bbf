use crate::Hand;
use std::fmt;

/// Identifies one of the two players in a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    /// The player who places first in a new game.
    One,
    /// The player who places second in a new game.
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const PLAYERS: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The player whose turn comes after this player's turn.
    #[inline]
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The position of the player in [PlayerId::PLAYERS].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// A named participant with a score and a [Hand].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    score: usize,
    hand: Hand,
}

impl Player {
    /// A player named `name` holding `hand` with a score of `0`.
    pub fn new(name: impl Into<String>, hand: Hand) -> Player {
        Player::with_score(name, 0, hand)
    }

    /// A player named `name` holding `hand` with `score`, for restoring a saved game.
    pub fn with_score(name: impl Into<String>, score: usize, hand: Hand) -> Player {
        Player {
            name: name.into(),
            score,
            hand,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's accumulated score.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Overwrites the score with `score`.
    #[inline]
    pub fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    /// The player's [tiles](crate::Tile).
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
