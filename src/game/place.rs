use crate::{
    check_tile_on_lines, Coordinate, GameSession, LineScores, LineViolation, Lines, Notification,
    NotificationState, Notifications, PlayerId, Tile, FIRST_PLACEMENT_SCORE, SCORE_BONUS,
};
use std::{fmt, iter};
use tap::{TapFallible, TapOptional};
use tracing::instrument;

/// The message reported when a [tile](Tile) has been placed.
pub const PLACE_SUCCESS_MESSAGE: &str = "Tile placed successfully.";
/// The message reported once for each line completed as a Qwirkle.
pub const QWIRKLE_MESSAGE: &str = "QWIRKLE!!!";

/// Describes the reason why [`GameSession::place_tile`] could not be executed. Nothing in the
/// [GameSession] changes when a placement is rejected.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlaceError {
    /// Attempting to place after the game has ended.
    HasEnded,
    /// Attempting to place a [tile](Tile) which is not in the current player's hand.
    TileNotInHand {
        /// The requested [tile](Tile).
        tile: Tile,
    },
    /// Attempting to place on or outside the [coordinate limit](crate::COORDINATE_LIMIT).
    CoordinateOutOfRange {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place onto a cell which already holds a [tile](Tile).
    CellOccupied {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place away from every [tile](Tile) on a non-empty board.
    NoAdjacentTile,
    /// Attempting to place a [tile](Tile) which cannot join its [lines](Lines).
    LineRuleViolation {
        /// The broken rule.
        violation: LineViolation,
    },
}

impl PlaceError {
    /// The failure reported to the players.
    pub fn notification(&self) -> Notification {
        Notification::new(self.to_string(), NotificationState::PlaceFailure)
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::HasEnded => write!(f, "The game has already ended."),
            PlaceError::TileNotInHand { .. } => {
                write!(f, "The specified tile is not present in hand.")
            }
            PlaceError::CoordinateOutOfRange { .. } => {
                write!(f, "The specified grid location is outside the board.")
            }
            PlaceError::CellOccupied { .. } => {
                write!(f, "A tile is already present in the provided grid location.")
            }
            PlaceError::NoAdjacentTile => write!(f, "No adjacent tile to form line."),
            PlaceError::LineRuleViolation { .. } => write!(f, "Tile violates line rules."),
        }
    }
}

impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaceError::LineRuleViolation { violation } => Some(violation),
            _ => None,
        }
    }
}

/// Describes what changed after a successful [`GameSession::place_tile`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlaceOutcome {
    /// The player who placed the [tile](Tile).
    pub player: PlayerId,
    /// The placed [tile](Tile).
    pub tile: Tile,
    /// Where the [tile](Tile) was placed.
    pub coordinate: Coordinate,
    /// The points from each line before bonuses.
    pub scores: LineScores,
    /// The number of [bonuses](SCORE_BONUS) earned, one for each Qwirkle and one for
    /// emptying the hand.
    pub bonuses: usize,
    /// The points added to the player's score, including bonuses.
    pub points: usize,
    /// The [tile](Tile) drawn from the bag into the player's hand, if the bag was not empty.
    pub drawn: Option<Tile>,
    /// Whether the placement ended the game.
    pub has_ended: bool,
}

impl PlaceOutcome {
    /// One [Qwirkle](NotificationState::Qwirkle) for each completed line, then
    /// [PlaceSuccess](NotificationState::PlaceSuccess), then
    /// [GameOver](NotificationState::GameOver) if the game has ended.
    pub fn notifications(&self) -> Notifications {
        let mut notifications: Notifications =
            iter::repeat_with(|| Notification::new(QWIRKLE_MESSAGE, NotificationState::Qwirkle))
                .take(self.scores.qwirkles())
                .collect();
        notifications.push(Notification::new(
            PLACE_SUCCESS_MESSAGE,
            NotificationState::PlaceSuccess,
        ));
        if self.has_ended {
            notifications.push(Notification::new("", NotificationState::GameOver));
        }
        notifications
    }
}

impl GameSession {
    /// Checks whether placing `tile` at `coordinate` breaks a rule and returns the first broken
    /// rule. Otherwise, moves `tile` from the current player's hand onto the board, draws the
    /// front of the bag into the hand, adds the earned points to the current player, and
    /// advances to the next player.
    ///
    /// # Points Calculation
    ///
    /// Each non-empty line earns its length including `tile`. A line reaching
    /// [`MAX_LINE_LEN`](crate::MAX_LINE_LEN) is a Qwirkle and earns a [bonus](SCORE_BONUS).
    /// Emptying the hand earns another [bonus](SCORE_BONUS). The very first placement of the
    /// game sets the score to [`FIRST_PLACEMENT_SCORE`] before the points are added, even when
    /// a [loaded](GameSession::load) score was higher.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// * [`PlaceError::HasEnded`] Attempting to place after the game has ended.
    /// * [`PlaceError::TileNotInHand`] Attempting to place a [tile](Tile) not in the hand.
    /// * [`PlaceError::CoordinateOutOfRange`] Attempting to place too far from the center.
    /// * [`PlaceError::CellOccupied`] Attempting to place onto another [tile](Tile).
    /// * [`PlaceError::NoAdjacentTile`] Attempting to place away from the other
    /// [tiles](Tile).
    /// * [`PlaceError::LineRuleViolation`] Attempting to place a [tile](Tile) which cannot
    /// join its lines.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn place_tile(
        &mut self,
        tile: Tile,
        coordinate: Coordinate,
    ) -> Result<PlaceOutcome, PlaceError> {
        let lines = self
            .check_placement(&tile, coordinate)
            .tap_err(|error| tracing::debug!(%error, "placement rejected"))?;

        let current_player = self.current_player;
        let is_first_placement = self.board.is_empty();
        let GameSession {
            bag,
            board,
            players,
            ..
        } = &mut *self;
        let player = &mut players[current_player.index()];

        if is_first_placement {
            player.set_score(FIRST_PLACEMENT_SCORE);
        }

        let tile = match player.hand_mut().play_tile(&tile) {
            Ok(tile) => tile,
            Err(error) => {
                dbg!(&error);
                unreachable!("{tile} was checked to be in the hand.")
            }
        };
        if let Err(error) = board.place_tile(tile, coordinate) {
            dbg!(&error);
            unreachable!("{coordinate:?} was checked to be inside the board.")
        }
        let drawn = bag
            .draw()
            .tap_some(|&drawn| player.hand_mut().add_tile(drawn));

        let scores = LineScores::new(&lines);
        let bonuses = scores.qwirkles() + usize::from(player.hand().is_empty());
        let points = scores.total() + SCORE_BONUS * bonuses;
        player.set_score(player.score() + points);

        self.switch_player();
        let has_ended = self.has_ended();
        tracing::debug!(%tile, ?coordinate, points, bonuses, "tile placed");
        if has_ended {
            tracing::info!(winner = ?self.winner(), "game over");
        }

        Ok(PlaceOutcome {
            player: current_player,
            tile,
            coordinate,
            scores,
            bonuses,
            points,
            drawn,
            has_ended,
        })
    }

    /// Checks the rules in the order documented on [`GameSession::place_tile`].
    ///
    /// # Returns
    ///
    /// The [lines](Lines) `tile` would join.
    fn check_placement(&self, tile: &Tile, coordinate: Coordinate) -> Result<Lines, PlaceError> {
        if self.has_ended() {
            return Err(PlaceError::HasEnded);
        }
        if !self.get_hand(self.current_player).contains(tile) {
            return Err(PlaceError::TileNotInHand { tile: *tile });
        }
        match self.board.at(coordinate) {
            Err(_) => return Err(PlaceError::CoordinateOutOfRange { coordinate }),
            Ok(Some(_)) => return Err(PlaceError::CellOccupied { coordinate }),
            Ok(None) => {}
        }

        let lines = self.adjacent_lines(coordinate);
        if !self.board.is_empty() && lines.is_empty() {
            return Err(PlaceError::NoAdjacentTile);
        }
        check_tile_on_lines(tile, &lines)
            .map_err(|violation| PlaceError::LineRuleViolation { violation })?;

        Ok(lines)
    }
}
