use sqlx::sqlite::SqlitePool;

use crate::models::*;

/// Create the three tables on startup if they do not exist yet. The
/// required columns are NOT NULL so that an insert with a missing field is
/// rejected by the store rather than checked in the handlers.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               high_score INTEGER NOT NULL,
               created_at TEXT NOT NULL,
               updated_at TEXT NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS games (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               content TEXT NOT NULL,
               created_at TEXT NOT NULL,
               updated_at TEXT NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    // player_id/game_id are plain columns, not foreign keys; referential
    // integrity is out of scope for this service.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS plays (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               player_id INTEGER NOT NULL,
               game_id INTEGER NOT NULL,
               name TEXT NOT NULL,
               score INTEGER NOT NULL,
               created_at TEXT NOT NULL,
               updated_at TEXT NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(r#"SELECT * FROM players"#)
        .fetch_all(pool)
        .await
}

pub async fn insert_player(
    pool: &SqlitePool,
    new: NewPlayer,
    now: &str,
) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players (name, high_score, created_at, updated_at)
           VALUES (?, ?, ?, ?)
           RETURNING *"#,
    )
    .bind(new.name)
    .bind(new.high_score)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(r#"SELECT * FROM players WHERE id = ?"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

// COALESCE merges the patch against the stored row in one statement, so an
// absent field keeps its value and concurrent updates cannot lose writes.
pub async fn update_player(
    pool: &SqlitePool,
    id: i64,
    patch: PlayerPatch,
    now: &str,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players
           SET name = COALESCE(?, name),
               high_score = COALESCE(?, high_score),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#,
    )
    .bind(patch.name)
    .bind(patch.high_score)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_player(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(r#"DELETE FROM players WHERE id = ? RETURNING *"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

// Game queries
pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(r#"SELECT * FROM games"#)
        .fetch_all(pool)
        .await
}

pub async fn insert_game(pool: &SqlitePool, new: NewGame, now: &str) -> Result<Game, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"INSERT INTO games (content, created_at, updated_at)
           VALUES (?, ?, ?)
           RETURNING *"#,
    )
    .bind(new.content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_game_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(r#"SELECT * FROM games WHERE id = ?"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_game(
    pool: &SqlitePool,
    id: i64,
    patch: GamePatch,
    now: &str,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"UPDATE games
           SET content = COALESCE(?, content),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#,
    )
    .bind(patch.content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_game(pool: &SqlitePool, id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(r#"DELETE FROM games WHERE id = ? RETURNING *"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

// Play queries
pub async fn get_all_plays(pool: &SqlitePool) -> Result<Vec<Play>, sqlx::Error> {
    sqlx::query_as::<_, Play>(r#"SELECT * FROM plays"#)
        .fetch_all(pool)
        .await
}

pub async fn insert_play(pool: &SqlitePool, new: NewPlay, now: &str) -> Result<Play, sqlx::Error> {
    sqlx::query_as::<_, Play>(
        r#"INSERT INTO plays (player_id, game_id, name, score, created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?)
           RETURNING *"#,
    )
    .bind(new.player_id)
    .bind(new.game_id)
    .bind(new.name)
    .bind(new.score)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_play_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Play>, sqlx::Error> {
    sqlx::query_as::<_, Play>(r#"SELECT * FROM plays WHERE id = ?"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

// Only updated_at moves; created_at is written once at insert.
pub async fn update_play(
    pool: &SqlitePool,
    id: i64,
    patch: PlayPatch,
    now: &str,
) -> Result<Option<Play>, sqlx::Error> {
    sqlx::query_as::<_, Play>(
        r#"UPDATE plays
           SET player_id = COALESCE(?, player_id),
               game_id = COALESCE(?, game_id),
               name = COALESCE(?, name),
               score = COALESCE(?, score),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#,
    )
    .bind(patch.player_id)
    .bind(patch.game_id)
    .bind(patch.name)
    .bind(patch.score)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_play(pool: &SqlitePool, id: i64) -> Result<Option<Play>, sqlx::Error> {
    sqlx::query_as::<_, Play>(r#"DELETE FROM plays WHERE id = ? RETURNING *"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}
