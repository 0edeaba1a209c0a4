use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::models::{NewPlay, Play, PlayBody, PlayPatch};
use crate::resource::Resource;

impl Resource for Play {
    const COLLECTION: &'static str = "plays";
    const SINGULAR: &'static str = "play";

    type Row = Play;
    type CreateBody = PlayBody<NewPlay>;
    type UpdateBody = PlayBody<PlayPatch>;

    async fn list(pool: &SqlitePool) -> Result<Vec<Play>, sqlx::Error> {
        db::get_all_plays(pool).await
    }

    async fn insert(
        pool: &SqlitePool,
        body: Self::CreateBody,
        now: &str,
    ) -> Result<Play, sqlx::Error> {
        db::insert_play(pool, body.play, now).await
    }

    async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Play>, sqlx::Error> {
        db::get_play_by_id(pool, id).await
    }

    async fn update(
        pool: &SqlitePool,
        id: i64,
        body: Self::UpdateBody,
        now: &str,
    ) -> Result<Option<Play>, sqlx::Error> {
        db::update_play(pool, id, body.play, now).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Play>, sqlx::Error> {
        db::delete_play(pool, id).await
    }

    fn id(row: &Play) -> i64 {
        row.id
    }

    fn deleted_message(row: &Play) -> String {
        format!(
            "Deleted play with a game id of {}, a player id of {} and id of {}",
            row.game_id, row.player_id, row.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_message_names_both_references() {
        let play = Play {
            id: 7,
            player_id: 3,
            game_id: 4,
            name: "r1".to_string(),
            score: 12,
            created_at: String::new(),
            updated_at: String::new(),
        };

        assert_eq!(
            Play::deleted_message(&play),
            "Deleted play with a game id of 4, a player id of 3 and id of 7"
        );
    }

    #[test]
    fn single_item_envelope_uses_singular_key() {
        let play = Play {
            id: 1,
            player_id: 1,
            game_id: 1,
            name: "r1".to_string(),
            score: 5,
            created_at: String::new(),
            updated_at: String::new(),
        };

        let wrapped = Play::wrap_one(&play);
        assert!(wrapped.get("play").is_some());
        assert!(wrapped.get("plays").is_none());
    }
}
