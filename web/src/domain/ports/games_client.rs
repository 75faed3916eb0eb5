//! Driven port for the remote games backend.
//!
//! The port speaks wire messages: it issues exactly one remote call per method
//! and hands back the raw response. Mapping into domain entities happens in
//! the service so adapters stay thin and interchangeable.

use async_trait::async_trait;

use crate::wire;

/// Errors surfaced while calling the games backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GamesClientError {
    /// The backend could not be reached.
    #[error("games backend unavailable: {message}")]
    Unavailable { message: String },
    /// The call did not complete within the configured deadline.
    #[error("games backend timed out: {message}")]
    Timeout { message: String },
    /// The backend does not know the requested game.
    #[error("game not found: {message}")]
    NotFound { message: String },
    /// The backend refused the request arguments or game state.
    #[error("games backend rejected request: {message}")]
    Rejected { message: String },
    /// Any other backend-reported failure.
    #[error("games backend failed: {message}")]
    Backend { message: String },
}

impl GamesClientError {
    /// The backend could not be reached.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// The call did not finish in time.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// The backend has no such game.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The backend refused the request arguments.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Any other backend failure.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Port for the `proto.playground.Games` remote procedures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GamesClient: Send + Sync {
    /// List the games known to the backend.
    async fn list_games(
        &self,
        request: wire::ListGamesRequest,
    ) -> Result<wire::ListGamesResponse, GamesClientError>;

    /// Start a new game.
    async fn create_game(
        &self,
        request: wire::CreateGameRequest,
    ) -> Result<wire::Game, GamesClientError>;

    /// Fetch the current state of one game.
    async fn get_game(
        &self,
        request: wire::GetGameRequest,
    ) -> Result<wire::Game, GamesClientError>;

    /// Register one throw. Each call records a new throw.
    async fn count_points(
        &self,
        request: wire::CountPointsRequest,
    ) -> Result<wire::CountPointsResponse, GamesClientError>;

    /// Undo the most recent throw.
    async fn cancel_last_score(
        &self,
        request: wire::CancelLastScoreRequest,
    ) -> Result<wire::CancelLastScoreResponse, GamesClientError>;
}

/// Fixture implementation standing in for an empty backend.
///
/// Lists no games and reports every game lookup as missing; `create_game`
/// returns a fresh two-player 301 game.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGamesClient;

/// Identifier of the game returned by [`FixtureGamesClient::create_game`].
pub const FIXTURE_GAME_ID: &str = "00000000-0000-0000-0000-000000000001";

#[async_trait]
impl GamesClient for FixtureGamesClient {
    async fn list_games(
        &self,
        _request: wire::ListGamesRequest,
    ) -> Result<wire::ListGamesResponse, GamesClientError> {
        Ok(wire::ListGamesResponse::default())
    }

    async fn create_game(
        &self,
        _request: wire::CreateGameRequest,
    ) -> Result<wire::Game, GamesClientError> {
        let player_details = ["Player1", "Player2"]
            .into_iter()
            .map(|name| wire::PlayerDetails {
                points_to_win: 301,
                name: name.to_owned(),
            })
            .collect();

        Ok(wire::Game {
            id: FIXTURE_GAME_ID.to_owned(),
            player: "Player1".to_owned(),
            player_points_to_win: 301,
            player_details,
            ..wire::Game::default()
        })
    }

    async fn get_game(
        &self,
        request: wire::GetGameRequest,
    ) -> Result<wire::Game, GamesClientError> {
        Err(GamesClientError::not_found(request.game_id))
    }

    async fn count_points(
        &self,
        request: wire::CountPointsRequest,
    ) -> Result<wire::CountPointsResponse, GamesClientError> {
        Err(GamesClientError::not_found(request.game_id))
    }

    async fn cancel_last_score(
        &self,
        request: wire::CancelLastScoreRequest,
    ) -> Result<wire::CancelLastScoreResponse, GamesClientError> {
        Err(GamesClientError::not_found(request.game_id))
    }
}
