//! Domain ports for the hexagonal boundary.

mod games_client;

#[cfg(test)]
pub use games_client::MockGamesClient;
pub use games_client::{FIXTURE_GAME_ID, FixtureGamesClient, GamesClient, GamesClientError};
