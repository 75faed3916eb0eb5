//! Conversion of wire records into domain entities.
//!
//! Every conversion consumes the whole record and either yields a complete
//! entity or a [`MappingError`]. Wire structs are destructured exhaustively so
//! a field added to the schema fails to compile here until it is mapped.

use chrono::DateTime;

use super::game::{Game, GameId, GameParts, PlayerDetails, Point, PointKind, Round, Winner};
use crate::wire;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Errors raised when a wire record violates the schema contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("game record has an empty id")]
    EmptyGameId,
    #[error("response carries no game record")]
    MissingGame,
    #[error("unknown point kind ordinal {value}")]
    UnknownPointKind { value: i32 },
    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: i32 },
    #[error("round numbers start at 1, got 0")]
    ZeroRoundNumber,
    #[error("timestamp {seconds}s {nanos}ns is out of range")]
    InvalidTimestamp { seconds: i64, nanos: i32 },
}

/// Format a wire timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The instant is rendered as transmitted (UTC). An absent timestamp stays
/// absent so "not yet" is distinguishable from the epoch.
pub(crate) fn format_timestamp(
    timestamp: Option<&wire::Timestamp>,
) -> Result<Option<String>, MappingError> {
    let Some(timestamp) = timestamp else {
        return Ok(None);
    };
    let invalid = || MappingError::InvalidTimestamp {
        seconds: timestamp.seconds,
        nanos: timestamp.nanos,
    };

    if !(0..NANOS_PER_SECOND).contains(&timestamp.nanos) {
        return Err(invalid());
    }
    let nanos = u32::try_from(timestamp.nanos).map_err(|_| invalid())?;
    let instant = DateTime::from_timestamp(timestamp.seconds, nanos).ok_or_else(invalid)?;

    Ok(Some(instant.format(TIMESTAMP_FORMAT).to_string()))
}

fn non_negative(field: &'static str, value: i32) -> Result<u32, MappingError> {
    u32::try_from(value).map_err(|_| MappingError::NegativeValue { field, value })
}

/// Map a list response into games, preserving backend order.
pub(crate) fn games_from_wire(response: wire::ListGamesResponse) -> Result<Vec<Game>, MappingError> {
    let wire::ListGamesResponse { games } = response;
    games.into_iter().map(Game::try_from).collect()
}

impl TryFrom<i32> for PointKind {
    type Error = MappingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match wire::PointKind::try_from(value) {
            Ok(wire::PointKind::Unset) => Ok(Self::Unset),
            Ok(wire::PointKind::Regular) => Ok(Self::Regular),
            Ok(wire::PointKind::Overthrow) => Ok(Self::Overthrow),
            Err(_) => Err(MappingError::UnknownPointKind { value }),
        }
    }
}

impl TryFrom<wire::Point> for Point {
    type Error = MappingError;

    fn try_from(value: wire::Point) -> Result<Self, Self::Error> {
        let wire::Point { value, kind } = value;
        Ok(Self::new(
            non_negative("point value", value)?,
            PointKind::try_from(kind)?,
        ))
    }
}

impl TryFrom<wire::Round> for Round {
    type Error = MappingError;

    fn try_from(value: wire::Round) -> Result<Self, Self::Error> {
        let wire::Round { number, points } = value;
        let number = non_negative("round number", number)?;
        if number == 0 {
            return Err(MappingError::ZeroRoundNumber);
        }
        let scores = points
            .into_iter()
            .map(Point::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(number, scores))
    }
}

impl TryFrom<wire::PlayerDetails> for PlayerDetails {
    type Error = MappingError;

    fn try_from(value: wire::PlayerDetails) -> Result<Self, Self::Error> {
        let wire::PlayerDetails {
            points_to_win,
            name,
        } = value;
        Ok(Self::new(name, non_negative("points to win", points_to_win)?))
    }
}

impl TryFrom<wire::Game> for Game {
    type Error = MappingError;

    fn try_from(value: wire::Game) -> Result<Self, Self::Error> {
        let wire::Game {
            id,
            winner,
            player,
            player_points_to_win,
            create_time,
            update_time,
            rounds,
            player_details,
        } = value;

        let parts = GameParts {
            id: GameId::new(id).map_err(|_| MappingError::EmptyGameId)?,
            winner: Winner::from_name(winner),
            player,
            player_points_to_win: non_negative("player points to win", player_points_to_win)?,
            rounds: rounds
                .into_iter()
                .map(Round::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            player_details: player_details
                .into_iter()
                .map(PlayerDetails::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            create_time: format_timestamp(create_time.as_ref())?,
            update_time: format_timestamp(update_time.as_ref())?,
        };

        Ok(Self::from_parts(parts))
    }
}

impl TryFrom<wire::CountPointsResponse> for Game {
    type Error = MappingError;

    fn try_from(value: wire::CountPointsResponse) -> Result<Self, Self::Error> {
        value.game.ok_or(MappingError::MissingGame)?.try_into()
    }
}

impl TryFrom<wire::CancelLastScoreResponse> for Game {
    type Error = MappingError;

    fn try_from(value: wire::CancelLastScoreResponse) -> Result<Self, Self::Error> {
        value.game.ok_or(MappingError::MissingGame)?.try_into()
    }
}
