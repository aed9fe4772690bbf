use crate::NOTIFICATION_CAPACITY;
use smallvec::SmallVec;
use std::fmt;

/// Tags a [Notification] with the kind of event it reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NotificationState {
    /// A [tile](crate::Tile) was placed on the board.
    PlaceSuccess,
    /// A placement was rejected and nothing changed.
    PlaceFailure,
    /// A [tile](crate::Tile) was swapped with one from the bag.
    ReplaceSuccess,
    /// A replacement was rejected and nothing changed.
    ReplaceFailure,
    /// The game has ended.
    GameOver,
    /// A placement completed a line of [`MAX_LINE_LEN`](crate::MAX_LINE_LEN)
    /// [tiles](crate::Tile).
    Qwirkle,
}

/// A message for the players with the kind of event it reports.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Notification {
    /// Text to show to the players. Empty for [NotificationState::GameOver].
    pub message: String,
    /// The kind of event.
    pub state: NotificationState,
}

impl Notification {
    /// A notification with `message` tagged with `state`.
    pub fn new(message: impl Into<String>, state: NotificationState) -> Notification {
        Notification {
            message: message.into(),
            state,
        }
    }

    /// Whether the notification reports a rejected action.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.state,
            NotificationState::PlaceFailure | NotificationState::ReplaceFailure
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The notifications produced by a single action in the order they should be shown.
///
/// # See Also
///
/// * [NOTIFICATION_CAPACITY]
/// * [PlaceOutcome::notifications](crate::PlaceOutcome::notifications)
pub type Notifications = SmallVec<[Notification; NOTIFICATION_CAPACITY]>;
