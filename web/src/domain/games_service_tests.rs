//! Tests for the games service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockGamesClient;
use rstest::{fixture, rstest};

fn make_service(client: MockGamesClient) -> GamesService<MockGamesClient> {
    GamesService::new(Arc::new(client))
}

#[fixture]
fn game_id() -> GameId {
    GameId::new("g1").expect("fixture id is valid")
}

fn wire_game(id: &str, winner: &str) -> wire::Game {
    wire::Game {
        id: id.to_owned(),
        winner: winner.to_owned(),
        player: "Player2".to_owned(),
        player_points_to_win: 301,
        create_time: Some(wire::Timestamp {
            seconds: 1_710_424_800,
            nanos: 0,
        }),
        ..wire::Game::default()
    }
}

#[tokio::test]
async fn list_games_reports_unreachable_backend_without_retrying() {
    let mut client = MockGamesClient::new();
    client
        .expect_list_games()
        .times(1)
        .return_once(|_| Err(GamesClientError::unavailable("connection refused")));

    let error = make_service(client)
        .list_games()
        .await
        .expect_err("unreachable backend must fail");

    assert_eq!(error.code(), ErrorCode::BackendUnavailable);
    assert_eq!(error.message(), "Backend is not available");
}

#[tokio::test]
async fn list_games_maps_every_game_in_order() {
    let mut client = MockGamesClient::new();
    client.expect_list_games().times(1).return_once(|_| {
        Ok(wire::ListGamesResponse {
            games: vec![wire_game("g2", ""), wire_game("g1", "Player1")],
        })
    });

    let games = make_service(client).list_games().await.expect("list succeeds");

    let ids: Vec<&str> = games.iter().map(|game| game.id().as_ref()).collect();
    assert_eq!(ids, ["g2", "g1"]);
    assert_eq!(games[0].start_time(), Some("2024-03-14 14:00:00"));
    assert!(games[1].is_finished());
}

#[rstest]
#[tokio::test]
async fn game_details_maps_a_fresh_game(game_id: GameId) {
    let mut client = MockGamesClient::new();
    client
        .expect_get_game()
        .withf(|request| request.game_id == "g1")
        .times(1)
        .return_once(|_| Ok(wire_game("g1", "")));

    let game = make_service(client)
        .game_details(&game_id)
        .await
        .expect("details succeed");

    assert_eq!(game.id(), &game_id);
    assert!(game.winner().is_none());
    assert_eq!(game.rounds_number(), 0);
}

#[rstest]
#[tokio::test]
async fn count_points_surfaces_the_winner(game_id: GameId) {
    let mut client = MockGamesClient::new();
    client
        .expect_count_points()
        .withf(|request| request.game_id == "g1" && request.points == 20)
        .times(1)
        .return_once(|_| {
            Ok(wire::CountPointsResponse {
                game: Some(wire_game("g1", "Player1")),
            })
        });

    let game = make_service(client)
        .count_points(&game_id, 20)
        .await
        .expect("count succeeds");

    assert_eq!(game.winner().map(|winner| winner.name()), Some("Player1"));
}

#[rstest]
#[tokio::test]
async fn count_points_accepts_a_miss(game_id: GameId) {
    let mut client = MockGamesClient::new();
    client
        .expect_count_points()
        .withf(|request| request.points == 0)
        .times(1)
        .return_once(|_| {
            Ok(wire::CountPointsResponse {
                game: Some(wire_game("g1", "")),
            })
        });

    let result = make_service(client).count_points(&game_id, 0).await;

    assert!(result.is_ok());
}

#[rstest]
#[tokio::test]
async fn count_points_rejects_values_beyond_the_wire_range(game_id: GameId) {
    let mut client = MockGamesClient::new();
    client.expect_count_points().never();

    let error = make_service(client)
        .count_points(&game_id, u32::MAX)
        .await
        .expect_err("oversized points must fail");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn unknown_point_kind_becomes_a_generic_failure(game_id: GameId) {
    let mut game = wire_game("g1", "");
    game.rounds = vec![wire::Round {
        number: 1,
        points: vec![wire::Point { value: 20, kind: 5 }],
    }];
    let mut client = MockGamesClient::new();
    client
        .expect_count_points()
        .times(1)
        .return_once(move |_| Ok(wire::CountPointsResponse { game: Some(game) }));

    let error = make_service(client)
        .count_points(&game_id, 20)
        .await
        .expect_err("malformed record must fail");

    assert_eq!(error.message(), "Something went wrong");
}

#[rstest]
#[tokio::test]
async fn overthrow_ordinal_maps_to_an_overthrow_point(game_id: GameId) {
    let mut game = wire_game("g1", "");
    game.rounds = vec![wire::Round {
        number: 1,
        points: vec![wire::Point { value: 60, kind: 2 }],
    }];
    let mut client = MockGamesClient::new();
    client
        .expect_get_game()
        .times(1)
        .return_once(move |_| Ok(game));

    let game = make_service(client)
        .game_details(&game_id)
        .await
        .expect("details succeed");

    let point = game.rounds()[0].scores()[0];
    assert_eq!(point.kind(), crate::domain::PointKind::Overthrow);
    assert!(point.is_overthrow());
}

#[rstest]
#[case::unavailable(GamesClientError::unavailable("refused"), ErrorCode::BackendUnavailable)]
#[case::not_found(GamesClientError::not_found("g1"), ErrorCode::NotFound)]
#[case::timeout(GamesClientError::timeout("deadline exceeded"), ErrorCode::InternalError)]
#[case::rejected(GamesClientError::rejected("game finished"), ErrorCode::InternalError)]
#[case::backend(GamesClientError::backend("boom"), ErrorCode::InternalError)]
#[tokio::test]
async fn cancel_last_score_classifies_client_failures(
    game_id: GameId,
    #[case] failure: GamesClientError,
    #[case] expected: ErrorCode,
) {
    let mut client = MockGamesClient::new();
    client
        .expect_cancel_last_score()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = make_service(client)
        .cancel_last_score(&game_id)
        .await
        .expect_err("client failure must fail");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn cancel_last_score_requires_a_game_in_the_response(game_id: GameId) {
    let mut client = MockGamesClient::new();
    client
        .expect_cancel_last_score()
        .times(1)
        .return_once(|_| Ok(wire::CancelLastScoreResponse { game: None }));

    let error = make_service(client)
        .cancel_last_score(&game_id)
        .await
        .expect_err("missing game must fail");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn create_game_maps_the_new_game() {
    let mut client = MockGamesClient::new();
    client.expect_create_game().times(1).return_once(|_| {
        let mut game = wire_game("g3", "");
        game.player_details = vec![wire::PlayerDetails {
            points_to_win: 301,
            name: "Player1".to_owned(),
        }];
        Ok(game)
    });

    let game = make_service(client).create_game().await.expect("create succeeds");

    assert_eq!(game.id().as_ref(), "g3");
    assert_eq!(game.player_details()[0].points_to_win(), 301);
}

#[test]
fn clones_share_the_client_without_requiring_clone() {
    let service = make_service(MockGamesClient::new());

    let copy = service.clone();

    assert!(Arc::ptr_eq(&service.client, &copy.client));
}
