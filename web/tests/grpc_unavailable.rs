//! The tonic adapter against endpoints that never answer a gRPC call.

use std::net::{Ipv4Addr, TcpListener};
use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use tokio::io::AsyncReadExt;
use url::Url;
use web::domain::ports::{GamesClient, GamesClientError};
use web::domain::{ErrorCode, GameId, GamesService};
use web::outbound::grpc::GrpcGamesClient;
use web::wire;

/// Reserve a local port and release it so connections are refused.
#[fixture]
fn closed_endpoint() -> Url {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}")).expect("valid url")
}

#[fixture]
fn client(closed_endpoint: Url) -> GrpcGamesClient {
    GrpcGamesClient::new(
        &closed_endpoint,
        Duration::from_millis(500),
        Duration::from_secs(1),
    )
    .expect("endpoint builds")
}

#[rstest]
#[tokio::test]
async fn refused_connection_is_reported_as_unavailable(client: GrpcGamesClient) {
    let error = client
        .list_games(wire::ListGamesRequest {})
        .await
        .expect_err("nothing is listening");

    assert!(
        matches!(error, GamesClientError::Unavailable { .. }),
        "expected Unavailable, got {error:?}",
    );
}

#[rstest]
#[tokio::test]
async fn service_reports_backend_is_not_available(client: GrpcGamesClient) {
    let service = GamesService::new(Arc::new(client));

    let list_error = service.list_games().await.expect_err("nothing is listening");
    assert_eq!(list_error.code(), ErrorCode::BackendUnavailable);
    assert_eq!(list_error.message(), "Backend is not available");

    let game_id = GameId::new("g1").expect("valid game id");
    let score_error = service
        .count_points(&game_id, 20)
        .await
        .expect_err("nothing is listening");
    assert_eq!(score_error.message(), "Backend is not available");
}

#[tokio::test]
async fn expired_connect_timeout_is_reported_as_unavailable() {
    // Reserved TEST-NET-1 address; connects either hang or fail fast.
    let url = Url::parse("http://192.0.2.1:50051").expect("valid url");
    let client = GrpcGamesClient::new(&url, Duration::from_millis(50), Duration::from_secs(1))
        .expect("endpoint builds");

    let error = client
        .get_game(wire::GetGameRequest {
            game_id: "g1".to_owned(),
        })
        .await
        .expect_err("address never answers");

    assert!(
        matches!(error, GamesClientError::Unavailable { .. }),
        "expected Unavailable, got {error:?}",
    );
}

#[tokio::test]
async fn https_endpoints_open_with_a_tls_handshake() {
    const TLS_HANDSHAKE_RECORD: u8 = 0x16;

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    let first_byte = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("client connects");
        socket.read_u8().await.expect("client sends a first byte")
    });

    let url = Url::parse(&format!("https://127.0.0.1:{port}")).expect("valid url");
    let client = GrpcGamesClient::new(&url, Duration::from_secs(1), Duration::from_secs(1))
        .expect("tls endpoint builds");
    let error = client
        .list_games(wire::ListGamesRequest {})
        .await
        .expect_err("listener never completes a handshake");

    assert!(
        matches!(error, GamesClientError::Unavailable { .. }),
        "expected Unavailable, got {error:?}",
    );
    assert_eq!(
        first_byte.await.expect("listener task joins"),
        TLS_HANDSHAKE_RECORD,
        "https endpoints must not send a plaintext HTTP/2 preface",
    );
}
