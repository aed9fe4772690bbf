use crate::{Coordinate, GameSession, GameView, Hand, Notification, Notifications, PlayerId, Tile};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use smallvec::smallvec;

/// An action chosen by the current player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// [Place](GameSession::place_tile) `tile` at `coordinate`.
    Place {
        /// The [tile](Tile) to take from the hand.
        tile: Tile,
        /// Where to place the [tile](Tile).
        coordinate: Coordinate,
    },
    /// [Replace](GameSession::replace_tile) `tile` with the front of the bag.
    Replace {
        /// The [tile](Tile) to return to the bag.
        tile: Tile,
    },
}

/// Defines the methods the runtime calls on each player's client.
///
/// [`Client::get_action`] and [`Client::update_notification`] block execution until getting
/// input or updating output. [`Client::update_view`] may execute in parallel with the other
/// player's update.
///
/// # Errors
///
/// The implementor of [`Client`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Client<E> {
    /// Gets an [Action] from the current player with the state of the game and their hand.
    fn get_action(&self, view: &GameView<'_>, hand: &Hand) -> Result<Action, E>;

    /// Shows `notification` to the player. Failures are only sent to the current player.
    fn update_notification(&self, notification: &Notification) -> Result<(), E>;

    /// Updates the player with the state of the game and their hand.
    async fn update_view<'a>(&self, view: &'a GameView<'a>, hand: &'a Hand) -> Result<(), E>;
}

/// It repeatedly asks the current player for an [Action], and if the action is rejected,
/// it tells the player why and asks again. If the action is accepted, stops asking and returns
/// the notifications for every player.
///
/// # Arguments
///
/// * `clients`: Each player's client in turn order.
/// * `session`: The current state of the game.
///
/// # Errors
///
/// When the current player fails to send input or receive a failure.
pub fn process_turn<C, E>(
    clients: &[C; 2],
    session: &mut GameSession,
) -> Result<Notifications, E>
where
    C: Client<E>,
{
    let current_player = session.current_player();
    let client = &clients[current_player.index()];

    loop {
        let action = client.get_action(&session.view(), session.get_hand(current_player))?;
        let result = match action {
            Action::Place { tile, coordinate } => session
                .place_tile(tile, coordinate)
                .map(|outcome| outcome.notifications())
                .map_err(|error| error.notification()),
            Action::Replace { tile } => session
                .replace_tile(tile)
                .map(|outcome| smallvec![outcome.notification()])
                .map_err(|error| error.notification()),
        };
        match result {
            Ok(notifications) => return Ok(notifications),
            // cannot use map_err since E needs to be propagated here
            Err(failure) => client.update_notification(&failure)?,
        }
    }
}

/// Asynchronously sends the current state of the game to both [`Client`]s.
///
/// # Errors
///
/// Accumulates all errors from [`Client::update_view`] into a vector.
pub async fn send_updates<C, E>(clients: &[C; 2], session: &GameSession) -> Result<(), Vec<E>>
where
    C: Client<E>,
{
    let view = session.view();
    let update_tasks = PlayerId::PLAYERS
        .map(|player| clients[player.index()].update_view(&view, session.get_hand(player)));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Plays `session` until it has ended. Sends the state of the game to both players, then
/// [processes a turn](process_turn), sends its notifications to both players, and repeats.
///
/// # Errors
///
/// The first error from [`process_turn`] or [`Client::update_notification`], or all errors
/// from [`send_updates`].
///
/// # Returns
///
/// The ended game.
pub async fn run_game<C, E>(
    clients: &[C; 2],
    mut session: GameSession,
) -> Result<GameSession, Vec<E>>
where
    C: Client<E>,
{
    send_updates(clients, &session).await?;

    while !session.has_ended() {
        let notifications = process_turn(clients, &mut session).map_err(|error| vec![error])?;
        for notification in &notifications {
            for client in clients {
                client
                    .update_notification(notification)
                    .map_err(|error| vec![error])?;
            }
        }
        send_updates(clients, &session).await?;
    }

    tracing::info!(winner = ?session.winner(), "game finished");
    Ok(session)
}
