use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::models::{NewPlayer, Player, PlayerBody, PlayerPatch};
use crate::resource::Resource;

impl Resource for Player {
    const COLLECTION: &'static str = "players";
    const SINGULAR: &'static str = "player";

    type Row = Player;
    type CreateBody = PlayerBody<NewPlayer>;
    type UpdateBody = PlayerBody<PlayerPatch>;

    async fn list(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
        db::get_all_players(pool).await
    }

    async fn insert(
        pool: &SqlitePool,
        body: Self::CreateBody,
        now: &str,
    ) -> Result<Player, sqlx::Error> {
        db::insert_player(pool, body.player, now).await
    }

    async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
        db::get_player_by_id(pool, id).await
    }

    async fn update(
        pool: &SqlitePool,
        id: i64,
        body: Self::UpdateBody,
        now: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        db::update_player(pool, id, body.player, now).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
        db::delete_player(pool, id).await
    }

    fn id(row: &Player) -> i64 {
        row.id
    }

    fn deleted_message(row: &Player) -> String {
        format!("Deleted player with name of {} and id of {}", row.name, row.id)
    }
}
