//! Keep score of darts games held by the games backend.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use web::config::BackendSettings;
use web::domain::{Game, GameId, GamesService, ServiceResult};
use web::outbound::grpc::GrpcGamesClient;

/// `darts` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "darts",
    about = "Keep score of darts games held by the games backend",
    version
)]
struct CliArgs {
    /// Print results as JSON instead of a scoreboard.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List the games known to the backend.
    List,
    /// Start a new game.
    New,
    /// Show the scoreboard of one game.
    Show {
        #[arg(value_name = "game-id", value_parser = parse_game_id)]
        game_id: GameId,
    },
    /// Record one throw; use 0 for a miss.
    Score {
        #[arg(value_name = "game-id", value_parser = parse_game_id)]
        game_id: GameId,
        points: u32,
    },
    /// Undo the most recent throw.
    Undo {
        #[arg(value_name = "game-id", value_parser = parse_game_id)]
        game_id: GameId,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Games(Vec<Game>),
    Game(Box<Game>),
}

fn main() -> io::Result<ExitCode> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(CliArgs::parse()))
}

async fn async_main(args: CliArgs) -> io::Result<ExitCode> {
    let settings = BackendSettings::load_from_iter([OsString::from("darts")])
        .map_err(|error| io::Error::other(format!("load backend settings: {error}")))?;
    let url = settings.endpoint_url().map_err(io::Error::other)?;
    let client = GrpcGamesClient::new(&url, settings.connect_timeout(), settings.request_timeout())
        .map_err(|error| io::Error::other(format!("configure games client: {error}")))?;
    let service = GamesService::new(Arc::new(client));

    let outcome: ServiceResult<Output> = match args.command {
        Command::List => service.list_games().await.map(Output::Games),
        Command::New => service.create_game().await.map(single),
        Command::Show { game_id } => service.game_details(&game_id).await.map(single),
        Command::Score { game_id, points } => {
            service.count_points(&game_id, points).await.map(single)
        }
        Command::Undo { game_id } => service.cancel_last_score(&game_id).await.map(single),
    };

    let output = match outcome {
        Ok(output) => output,
        Err(error) => {
            eprintln!("{}", error.message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let text = if args.json {
        serde_json::to_string_pretty(&output)
            .map_err(|error| io::Error::other(format!("encode output: {error}")))?
    } else {
        match &output {
            Output::Games(games) => render_games(games),
            Output::Game(game) => render_scoreboard(game),
        }
    };
    println!("{text}");

    Ok(ExitCode::SUCCESS)
}

fn single(game: Game) -> Output {
    Output::Game(Box::new(game))
}

fn parse_game_id(raw: &str) -> Result<GameId, String> {
    GameId::new(raw).map_err(|error| error.to_string())
}

fn status(game: &Game) -> String {
    match game.winner() {
        Some(winner) => format!("won by {}", winner.name()),
        None => "in progress".to_owned(),
    }
}

fn render_games(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games yet".to_owned();
    }

    let mut lines = vec![format!("{:<38} {:<19} {}", "Game", "Started", "Status")];
    lines.extend(games.iter().map(|game| {
        format!(
            "{:<38} {:<19} {}",
            game.id().as_ref(),
            game.start_time().unwrap_or("-"),
            status(game)
        )
    }));
    lines.join("\n")
}

fn render_scoreboard(game: &Game) -> String {
    let mut lines = vec![format!("Game {}", game.id())];
    if let Some(start_time) = game.start_time() {
        lines.push(format!("Started {start_time}"));
    }
    match game.winner() {
        Some(winner) => lines.push(format!("{} won", winner.name())),
        None => lines.push(format!(
            "{} to throw, {} to win",
            game.player(),
            game.player_points_to_win()
        )),
    }

    lines.push(String::new());
    lines.extend(
        game.player_details()
            .iter()
            .map(|details| format!("{:<12} {:>4}", details.name(), details.points_to_win())),
    );

    lines.push(String::new());
    lines.push(format!("Rounds: {}", game.rounds_number()));
    lines.extend(game.rounds().iter().map(|round| {
        let scores: Vec<String> = round
            .scores()
            .iter()
            .map(|point| {
                if point.is_overthrow() {
                    format!("{} (overthrow)", point.value())
                } else {
                    point.value().to_string()
                }
            })
            .collect();
        format!("#{:<3} {}", round.number(), scores.join(", "))
    }));

    lines.join("\n")
}
