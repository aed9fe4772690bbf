use crate::{
    Board, Color, GameSession, Notification, NotificationState, PlaceOutcome, Player, PlayerId,
    ReplaceOutcome, Shape, Tile, TileBag,
};
use rand::Rng;
use std::fmt;

/// The message reported when a [tile](Tile) is placed or replaced without a game in progress.
pub const NO_GAME_MESSAGE: &str = "No game is in progress.";

/// Receives every [Notification] produced by a [GameManager] in the order it is produced.
pub trait Notifier {
    /// Shows `notification` to the players.
    fn notify(&mut self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// The phase of the game managed by a [GameManager].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// No game has begun or the last game was reset.
    NotStarted,
    /// A game is being played.
    InProgress,
    /// The bag and some player's hand are empty.
    Ended,
}

/// Coordinates the [phases](Phase) of one game at a time and reports the outcome of every
/// action through a [Notifier].
///
/// `NotStarted` advances to `InProgress` with [GameManager::begin_game] or
/// [GameManager::load_game], `InProgress` advances to `Ended` when an action ends the game, and
/// every phase returns to `NotStarted` with [GameManager::reset_game].
pub struct GameManager<N> {
    session: Option<GameSession>,
    notifier: N,
}

impl<N> fmt::Debug for GameManager<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameManager")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<N: Notifier> GameManager<N> {
    /// A manager with no game in progress which reports to `notifier`.
    pub fn new(notifier: N) -> GameManager<N> {
        GameManager {
            session: None,
            notifier,
        }
    }

    /// Replaces any current game with a new [session](GameSession::begin).
    pub fn begin_game(&mut self, player1: impl Into<String>, player2: impl Into<String>) {
        self.session = Some(GameSession::begin(player1, player2));
    }

    /// Same as [GameManager::begin_game] but shuffles the bag with `rng`.
    pub fn begin_game_with_rng<R: Rng + ?Sized>(
        &mut self,
        player1: impl Into<String>,
        player2: impl Into<String>,
        rng: &mut R,
    ) {
        self.session = Some(GameSession::begin_with_rng(player1, player2, rng));
    }

    /// Replaces any current game with a [loaded session](GameSession::load).
    pub fn load_game(
        &mut self,
        player1: Player,
        player2: Player,
        bag: TileBag,
        board: Board,
        current_player: PlayerId,
    ) {
        self.session = Some(GameSession::load(
            player1,
            player2,
            bag,
            board,
            current_player,
        ));
    }

    /// [Places](GameSession::place_tile) the [tile](Tile) with `color` and `shape` at
    /// `(row, column)` for the current player and notifies the outcome.
    ///
    /// [GameOver](NotificationState::GameOver) only follows the placement which ends the game.
    /// Later placements are rejected with a single
    /// [PlaceFailure](NotificationState::PlaceFailure).
    ///
    /// # Returns
    ///
    /// The outcome or [None] if the placement was rejected or no game is in progress.
    pub fn place_tile(
        &mut self,
        color: Color,
        shape: Shape,
        row: isize,
        column: isize,
    ) -> Option<PlaceOutcome> {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("placement without a game in progress");
            self.notifier.notify(&Notification::new(
                NO_GAME_MESSAGE,
                NotificationState::PlaceFailure,
            ));
            return None;
        };

        match session.place_tile(Tile::new(color, shape), (row, column)) {
            Ok(outcome) => {
                for notification in &outcome.notifications() {
                    self.notifier.notify(notification);
                }
                Some(outcome)
            }
            Err(error) => {
                self.notifier.notify(&error.notification());
                None
            }
        }
    }

    /// [Replaces](GameSession::replace_tile) the [tile](Tile) with `color` and `shape` in the
    /// current player's hand and notifies the outcome.
    ///
    /// # Returns
    ///
    /// The outcome or [None] if the replacement was rejected or no game is in progress.
    pub fn replace_tile(&mut self, color: Color, shape: Shape) -> Option<ReplaceOutcome> {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("replacement without a game in progress");
            self.notifier.notify(&Notification::new(
                NO_GAME_MESSAGE,
                NotificationState::ReplaceFailure,
            ));
            return None;
        };

        let result = session.replace_tile(Tile::new(color, shape));
        let notification = match &result {
            Ok(outcome) => outcome.notification(),
            Err(error) => error.notification(),
        };
        self.notifier.notify(&notification);
        result.ok()
    }

    /// Discards the current game, if any.
    pub fn reset_game(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("game reset");
        }
    }
}

impl<N> GameManager<N> {
    /// The current [Phase].
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::NotStarted,
            Some(session) if session.has_ended() => Phase::Ended,
            Some(_) => Phase::InProgress,
        }
    }

    /// Whether the current game has ended. `false` when no game is in progress.
    pub fn has_game_ended(&self) -> bool {
        self.phase() == Phase::Ended
    }

    /// A read-only view of the current game, if any.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The [Notifier] given to [GameManager::new].
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// A mutable reference to the [Notifier] given to [GameManager::new].
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
