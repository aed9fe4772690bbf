use crate::{GameSession, Notification, NotificationState, PlayerId, Tile};
use std::fmt;
use tap::TapFallible;
use tracing::instrument;

/// The message reported when a [tile](Tile) has been replaced.
pub const REPLACE_SUCCESS_MESSAGE: &str = "Tile replaced successfully.";

/// Describes the reason why [`GameSession::replace_tile`] could not be executed. Nothing in the
/// [GameSession] changes when a replacement is rejected.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ReplaceError {
    /// Attempting to replace after the game has ended.
    HasEnded,
    /// Attempting to replace a [tile](Tile) which is not in the current player's hand.
    TileNotInHand {
        /// The requested [tile](Tile).
        tile: Tile,
    },
    /// Attempting to replace instead of placing the first [tile](Tile) of the game.
    CannotReplaceBeforeFirstMove,
    /// Attempting to replace when no [tiles](Tile) are left in the bag.
    BagEmpty,
}

impl ReplaceError {
    /// The failure reported to the players.
    pub fn notification(&self) -> Notification {
        Notification::new(self.to_string(), NotificationState::ReplaceFailure)
    }
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceError::HasEnded => write!(f, "The game has already ended."),
            ReplaceError::TileNotInHand { .. } => {
                write!(f, "The specified tile is not present in hand.")
            }
            ReplaceError::CannotReplaceBeforeFirstMove => {
                write!(f, "Must place a tile on the first move.")
            }
            ReplaceError::BagEmpty => write!(f, "No more tiles remain to be replaced."),
        }
    }
}

impl std::error::Error for ReplaceError {}

/// Describes what changed after a successful [`GameSession::replace_tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ReplaceOutcome {
    /// The player who replaced the [tile](Tile).
    pub player: PlayerId,
    /// The [tile](Tile) returned to the back of the bag.
    pub replaced: Tile,
    /// The [tile](Tile) drawn from the front of the bag into the replaced [tile's](Tile)
    /// position in the hand.
    pub drawn: Tile,
}

impl ReplaceOutcome {
    /// The success reported to the players.
    pub fn notification(&self) -> Notification {
        Notification::new(REPLACE_SUCCESS_MESSAGE, NotificationState::ReplaceSuccess)
    }
}

impl GameSession {
    /// Checks whether replacing `tile` breaks a rule and returns the first broken rule.
    /// Otherwise, swaps `tile` in the current player's hand with the front of the bag,
    /// returns `tile` to the back of the bag, and advances to the next player. Scores do
    /// not change.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// * [`ReplaceError::HasEnded`] Attempting to replace after the game has ended.
    /// * [`ReplaceError::TileNotInHand`] Attempting to replace a [tile](Tile) not in the hand.
    /// * [`ReplaceError::CannotReplaceBeforeFirstMove`] Attempting to replace while the
    /// board is empty.
    /// * [`ReplaceError::BagEmpty`] Attempting to replace with an empty bag.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn replace_tile(&mut self, tile: Tile) -> Result<ReplaceOutcome, ReplaceError> {
        self.check_replacement(&tile)
            .tap_err(|error| tracing::debug!(%error, "replacement rejected"))?;

        let current_player = self.current_player;
        let GameSession { bag, players, .. } = &mut *self;
        let drawn = match players[current_player.index()]
            .hand_mut()
            .replace_tile(&tile, bag)
        {
            Ok(drawn) => drawn,
            Err(error) => {
                dbg!(&error, bag.len());
                unreachable!("{tile} was checked to be replaceable.")
            }
        };

        self.switch_player();
        tracing::debug!(replaced = %tile, %drawn, "tile replaced");

        Ok(ReplaceOutcome {
            player: current_player,
            replaced: tile,
            drawn,
        })
    }

    fn check_replacement(&self, tile: &Tile) -> Result<(), ReplaceError> {
        if self.has_ended() {
            return Err(ReplaceError::HasEnded);
        }
        if !self.get_hand(self.current_player).contains(tile) {
            return Err(ReplaceError::TileNotInHand { tile: *tile });
        }
        if self.board.is_empty() {
            return Err(ReplaceError::CannotReplaceBeforeFirstMove);
        }
        if self.bag.is_empty() {
            return Err(ReplaceError::BagEmpty);
        }

        Ok(())
    }
}
