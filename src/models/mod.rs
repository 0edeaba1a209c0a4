use serde::{Deserialize, Serialize};

/// Player row from the players table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub high_score: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating a player. Presence of the required fields
/// is enforced by the NOT NULL columns, not here.
#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    pub name: Option<String>,
    pub high_score: Option<i64>,
}

/// Partial update for a player. A field left out of the body keeps its
/// stored value; a present zero or empty string is a real write.
#[derive(Debug, Default, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub high_score: Option<i64>,
}

/// Request envelope nesting player fields under the singular key,
/// e.g. `{"player": {"name": "Ada", "high_score": 10}}`.
#[derive(Debug, Deserialize)]
pub struct PlayerBody<T> {
    pub player: T,
}

/// Game row from the games table. `content` is the serialized game state
/// the client stored, opaque to this service.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewGame {
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GamePatch {
    pub content: Option<String>,
}

/// Request envelope for game bodies, e.g. `{"game": {"content": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct GameBody<T> {
    pub game: T,
}

/// Play row from the plays table: one play result linking a player to a
/// game with a score. Neither reference is enforced by the store.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Play {
    pub id: i64,
    pub player_id: i64,
    pub game_id: i64,
    pub name: String,
    pub score: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPlay {
    pub player_id: Option<i64>,
    pub game_id: Option<i64>,
    pub name: Option<String>,
    pub score: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayPatch {
    pub player_id: Option<i64>,
    pub game_id: Option<i64>,
    pub name: Option<String>,
    pub score: Option<i64>,
}

/// Request envelope for play bodies, e.g. `{"play": {"score": 5}}`.
#[derive(Debug, Deserialize)]
pub struct PlayBody<T> {
    pub play: T,
}
