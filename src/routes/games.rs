use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::models::{Game, GameBody, GamePatch, NewGame};
use crate::resource::Resource;

impl Resource for Game {
    const COLLECTION: &'static str = "games";
    const SINGULAR: &'static str = "game";

    type Row = Game;
    type CreateBody = GameBody<NewGame>;
    type UpdateBody = GameBody<GamePatch>;

    async fn list(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
        db::get_all_games(pool).await
    }

    async fn insert(
        pool: &SqlitePool,
        body: Self::CreateBody,
        now: &str,
    ) -> Result<Game, sqlx::Error> {
        db::insert_game(pool, body.game, now).await
    }

    async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Game>, sqlx::Error> {
        db::get_game_by_id(pool, id).await
    }

    async fn update(
        pool: &SqlitePool,
        id: i64,
        body: Self::UpdateBody,
        now: &str,
    ) -> Result<Option<Game>, sqlx::Error> {
        db::update_game(pool, id, body.game, now).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Game>, sqlx::Error> {
        db::delete_game(pool, id).await
    }

    fn id(row: &Game) -> i64 {
        row.id
    }

    fn deleted_message(row: &Game) -> String {
        format!(
            "Deleted game with content of {} and id of {}",
            row.content, row.id
        )
    }
}
