//! Domain primitives, use cases, and ports.
//!
//! Purpose: Define the typed entities the presentation layer renders, the
//! mapping from backend wire records into them, and the service that wraps
//! every use case in a [`ServiceResult`].
//!
//! Public surface:
//! - Game (with the `GameDetails` alias), Round, Point, PointKind,
//!   PlayerDetails, Winner, GameId — immutable game snapshots.
//! - Error, ErrorCode, ServiceResult — user-safe failure outcomes.
//! - GamesService — scorekeeping use cases over a [`ports::GamesClient`].
//! - MappingError — wire contract violations found while mapping.

pub mod error;
pub mod game;
pub mod games_service;
pub mod mapping;
pub mod ports;

pub use self::error::{Error, ErrorCode, ServiceResult};
pub use self::game::{
    Game, GameDetails, GameId, GameIdValidationError, PlayerDetails, Point, PointKind, Round,
    Winner,
};
pub use self::games_service::GamesService;
pub use self::mapping::MappingError;
