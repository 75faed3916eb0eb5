//! Games domain service.
//!
//! Each operation performs one backend call and one mapping pass, then folds
//! every failure into a user-safe [`Error`]. Nothing is retried here: a
//! repeated `count_points` registers another throw on the backend.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::mapping::{MappingError, games_from_wire};
use crate::domain::ports::{GamesClient, GamesClientError};
use crate::domain::{Error, Game, GameDetails, GameId, ServiceResult};
use crate::wire;

/// Service exposing the scorekeeping use cases.
pub struct GamesService<C> {
    client: Arc<C>,
}

impl<C> Clone for GamesService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> GamesService<C> {
    /// Create a new service backed by the given client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C> GamesService<C>
where
    C: GamesClient,
{
    fn map_client_error(operation: &'static str, error: GamesClientError) -> Error {
        match error {
            GamesClientError::Unavailable { message } => {
                warn!(operation, %message, "games backend unavailable");
                Error::backend_unavailable()
            }
            GamesClientError::NotFound { message } => {
                info!(operation, %message, "game not found");
                Error::not_found()
            }
            other => {
                error!(operation, error = %other, "games backend call failed");
                Error::internal()
            }
        }
    }

    fn map_mapping_error(operation: &'static str, error: MappingError) -> Error {
        error!(operation, error = %error, "games backend returned a malformed record");
        Error::internal()
    }

    fn map_response<W, T>(
        operation: &'static str,
        response: Result<W, GamesClientError>,
    ) -> ServiceResult<T>
    where
        T: TryFrom<W, Error = MappingError>,
    {
        let response = response.map_err(|error| Self::map_client_error(operation, error))?;
        T::try_from(response).map_err(|error| Self::map_mapping_error(operation, error))
    }

    /// List the games known to the backend, in backend order.
    pub async fn list_games(&self) -> ServiceResult<Vec<Game>> {
        const OPERATION: &str = "list_games";

        let response = self
            .client
            .list_games(wire::ListGamesRequest {})
            .await
            .map_err(|error| Self::map_client_error(OPERATION, error))?;
        games_from_wire(response).map_err(|error| Self::map_mapping_error(OPERATION, error))
    }

    /// Start a new game.
    pub async fn create_game(&self) -> ServiceResult<Game> {
        let response = self.client.create_game(wire::CreateGameRequest {}).await;
        Self::map_response("create_game", response)
    }

    /// Fetch the current state of one game.
    pub async fn game_details(&self, game_id: &GameId) -> ServiceResult<GameDetails> {
        let request = wire::GetGameRequest {
            game_id: game_id.to_string(),
        };
        let response = self.client.get_game(request).await;
        Self::map_response("game_details", response)
    }

    /// Record one throw worth `points` (zero for a miss) and return the
    /// updated game.
    pub async fn count_points(&self, game_id: &GameId, points: u32) -> ServiceResult<GameDetails> {
        const OPERATION: &str = "count_points";

        let Ok(points) = i32::try_from(points) else {
            error!(operation = OPERATION, %game_id, points, "points exceed the wire range");
            return Err(Error::internal());
        };
        let request = wire::CountPointsRequest {
            game_id: game_id.to_string(),
            points,
        };
        let response = self.client.count_points(request).await;
        Self::map_response(OPERATION, response)
    }

    /// Undo the most recent throw and return the updated game.
    pub async fn cancel_last_score(&self, game_id: &GameId) -> ServiceResult<GameDetails> {
        let request = wire::CancelLastScoreRequest {
            game_id: game_id.to_string(),
        };
        let response = self.client.cancel_last_score(request).await;
        Self::map_response("cancel_last_score", response)
    }
}

#[cfg(test)]
#[path = "games_service_tests.rs"]
mod tests;
