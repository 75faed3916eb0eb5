//! Game data model.
//!
//! Entities are immutable snapshots of backend state. They are built by the
//! mapper in [`crate::domain::mapping`] and replaced wholesale on the next
//! fetch rather than updated in place.

use std::fmt;

use serde::Serialize;

/// Validation errors returned by [`GameId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameIdValidationError {
    #[error("game id must not be empty")]
    Empty,
}

/// Opaque backend identifier for a game.
///
/// ## Invariants
/// - Never empty. No other format rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct GameId(String);

impl GameId {
    /// Validate and construct a [`GameId`].
    ///
    /// # Examples
    /// ```
    /// use web::domain::GameId;
    ///
    /// let id = GameId::new("35523d4d-2eeb-4351-b876-1fa19ec5f835").expect("valid id");
    /// assert_eq!(id.as_ref(), "35523d4d-2eeb-4351-b876-1fa19ec5f835");
    /// assert!(GameId::new("").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, GameIdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(GameIdValidationError::Empty);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<GameId> for String {
    fn from(value: GameId) -> Self {
        value.0
    }
}

impl TryFrom<String> for GameId {
    type Error = GameIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Player who reached the target score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    name: String,
}

impl Winner {
    /// Interpret the backend's winner field.
    ///
    /// The backend sends an empty string while the game is in progress, so an
    /// empty name yields no winner.
    pub fn from_name(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self { name })
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Classification of a single throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Not reported by the backend.
    Unset,
    /// Counted towards the score.
    Regular,
    /// Throw exceeding the points remaining to win; it does not count.
    Overthrow,
}

/// Score value of one throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    value: u32,
    kind: PointKind,
}

impl Point {
    /// Build a throw.
    pub fn new(value: u32, kind: PointKind) -> Self {
        Self { value, kind }
    }

    /// Points scored by the throw.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether the throw counted.
    pub fn kind(&self) -> PointKind {
        self.kind
    }

    /// Whether the throw was discarded for exceeding the remaining points.
    pub fn is_overthrow(&self) -> bool {
        self.kind == PointKind::Overthrow
    }
}

/// One sequence of throws, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    number: u32,
    scores: Vec<Point>,
}

impl Round {
    pub(crate) fn new(number: u32, scores: Vec<Point>) -> Self {
        Self { number, scores }
    }

    /// One-based round number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Throws in the order they were made.
    pub fn scores(&self) -> &[Point] {
        &self.scores
    }
}

/// Participant and the points they still need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    name: String,
    points_to_win: u32,
}

impl PlayerDetails {
    /// Build a player standing.
    pub fn new(name: impl Into<String>, points_to_win: u32) -> Self {
        Self {
            name: name.into(),
            points_to_win,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Points the player still needs.
    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }
}

/// Snapshot of one game as reported by the backend.
///
/// ## Invariants
/// - `rounds_number` equals `rounds.len()`.
/// - `winner` is either absent or carries a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: GameId,
    winner: Option<Winner>,
    player: String,
    player_points_to_win: u32,
    rounds: Vec<Round>,
    rounds_number: usize,
    player_details: Vec<PlayerDetails>,
    create_time: Option<String>,
    update_time: Option<String>,
}

/// Detail view of a game. The backend sends one record shape for every
/// operation, so this is the same type as [`Game`].
pub type GameDetails = Game;

/// Field values used to assemble a [`Game`].
#[derive(Debug, Clone)]
pub(crate) struct GameParts {
    pub(crate) id: GameId,
    pub(crate) winner: Option<Winner>,
    pub(crate) player: String,
    pub(crate) player_points_to_win: u32,
    pub(crate) rounds: Vec<Round>,
    pub(crate) player_details: Vec<PlayerDetails>,
    pub(crate) create_time: Option<String>,
    pub(crate) update_time: Option<String>,
}

impl Game {
    pub(crate) fn from_parts(parts: GameParts) -> Self {
        let GameParts {
            id,
            winner,
            player,
            player_points_to_win,
            rounds,
            player_details,
            create_time,
            update_time,
        } = parts;

        Self {
            id,
            winner,
            player,
            player_points_to_win,
            rounds_number: rounds.len(),
            rounds,
            player_details,
            create_time,
            update_time,
        }
    }

    /// Backend identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Winner, once the game is finished.
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    /// Whether a winner has been declared.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Name of the player whose turn it is.
    pub fn player(&self) -> &str {
        self.player.as_str()
    }

    /// Points the current player still needs.
    pub fn player_points_to_win(&self) -> u32 {
        self.player_points_to_win
    }

    /// Rounds played so far, oldest first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds played.
    pub fn rounds_number(&self) -> usize {
        self.rounds_number
    }

    /// Standing of every player.
    pub fn player_details(&self) -> &[PlayerDetails] {
        &self.player_details
    }

    /// Moment the game started; this is the creation time.
    pub fn start_time(&self) -> Option<&str> {
        self.create_time()
    }

    /// Formatted creation time.
    pub fn create_time(&self) -> Option<&str> {
        self.create_time.as_deref()
    }

    /// Formatted time of the last change.
    pub fn update_time(&self) -> Option<&str> {
        self.update_time.as_deref()
    }
}
