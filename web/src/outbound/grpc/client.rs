//! Tonic-backed games client adapter.
//!
//! This adapter owns transport details only: endpoint, TLS and timeout setup,
//! one channel per call, and gRPC status mapping. Responses are handed back
//! as wire messages for the domain to map.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Code, Response, Status};
use tracing::debug;
use url::Url;

use crate::domain::ports::{GamesClient, GamesClientError};
use crate::wire;
use crate::wire::games_client::GamesClient as GamesStub;

/// Games client that opens a fresh channel to one endpoint for every call.
///
/// `https` endpoints are reached over TLS, verified against the webpki root
/// store. The adapter holds no game state.
#[derive(Debug, Clone)]
pub struct GrpcGamesClient {
    endpoint: Endpoint,
}

impl GrpcGamesClient {
    /// Build an adapter for `url` with explicit connect and request timeouts.
    /// ```rust,ignore
    /// let client = GrpcGamesClient::new(&url, connect_timeout, request_timeout);
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when `url` is not a valid endpoint URI or TLS cannot
    /// be configured for it.
    pub fn new(
        url: &Url,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let mut endpoint = Endpoint::from_shared(url.to_string())?
            .connect_timeout(connect_timeout)
            .timeout(request_timeout);
        if url.scheme() == "https" {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_webpki_roots())?;
        }
        Ok(Self { endpoint })
    }

    /// Connect a stub for one call.
    ///
    /// Refused connections and expired connect timeouts both mean the backend
    /// could not be reached, so both surface as `Unavailable`.
    async fn connect(&self, method: &'static str) -> Result<GamesStub<Channel>, GamesClientError> {
        let channel = self.endpoint.connect().await.map_err(|error| {
            debug!(method, %error, "games backend connect failed");
            GamesClientError::unavailable(error.to_string())
        })?;
        Ok(GamesStub::new(channel))
    }
}

fn into_message<T>(result: Result<Response<T>, Status>) -> Result<T, GamesClientError> {
    result.map(Response::into_inner).map_err(map_status_error)
}

#[async_trait]
impl GamesClient for GrpcGamesClient {
    async fn list_games(
        &self,
        request: wire::ListGamesRequest,
    ) -> Result<wire::ListGamesResponse, GamesClientError> {
        let mut stub = self.connect("ListGames").await?;
        into_message(stub.list_games(request).await)
    }

    async fn create_game(
        &self,
        request: wire::CreateGameRequest,
    ) -> Result<wire::Game, GamesClientError> {
        let mut stub = self.connect("CreateGame").await?;
        into_message(stub.create_game(request).await)
    }

    async fn get_game(
        &self,
        request: wire::GetGameRequest,
    ) -> Result<wire::Game, GamesClientError> {
        let mut stub = self.connect("GetGame").await?;
        into_message(stub.get_game(request).await)
    }

    async fn count_points(
        &self,
        request: wire::CountPointsRequest,
    ) -> Result<wire::CountPointsResponse, GamesClientError> {
        let mut stub = self.connect("CountPoints").await?;
        into_message(stub.count_points(request).await)
    }

    async fn cancel_last_score(
        &self,
        request: wire::CancelLastScoreRequest,
    ) -> Result<wire::CancelLastScoreResponse, GamesClientError> {
        let mut stub = self.connect("CancelLastScore").await?;
        into_message(stub.cancel_last_score(request).await)
    }
}

fn map_status_error(status: Status) -> GamesClientError {
    let code = status.code();
    let message = if status.message().is_empty() {
        format!("{code:?}")
    } else {
        format!("{code:?}: {}", status.message())
    };

    match code {
        Code::Unavailable => GamesClientError::unavailable(message),
        // tonic reports an expired request timeout as `Cancelled`.
        Code::DeadlineExceeded | Code::Cancelled => GamesClientError::timeout(message),
        Code::NotFound => GamesClientError::not_found(message),
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => {
            GamesClientError::rejected(message)
        }
        _ => GamesClientError::backend(message),
    }
}
