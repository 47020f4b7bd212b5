use anyhow::Result;
use libsql::Connection;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub id: i64,
    pub match_id: i64,
    pub minute: Option<i64>,
    pub author: Option<String>,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentary {
    pub text: String,
    pub minute: Option<i64>,
    pub author: Option<String>,
}

pub struct CommentaryStore<'a> {
    conn: &'a Connection,
}

impl<'a> CommentaryStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Lists entries for a match, newest first. `created_at` is the sole
    /// sort key. An empty result is a normal outcome.
    pub async fn list_by_match(&self, match_id: i64, limit: i64) -> Result<Vec<Commentary>> {
        let query = r#"
            SELECT id, match_id, minute, author, text, created_at
            FROM commentary
            WHERE match_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![match_id, limit])
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(Self::row_to_commentary(&row)?);
        }

        Ok(entries)
    }

    /// Inserts one entry; id and created_at are assigned by the store.
    /// A missing match row comes back as `StoreError::ForeignKeyViolation`.
    pub async fn create(
        &self,
        match_id: i64,
        input: CreateCommentary,
    ) -> Result<Commentary, StoreError> {
        let query = r#"
            INSERT INTO commentary (match_id, minute, author, text)
            VALUES (?, ?, ?, ?)
            RETURNING id, match_id, minute, author, text, created_at
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![match_id, input.minute, input.author, input.text],
            )
            .await?;

        match rows.next().await? {
            Some(row) => {
                Self::row_to_commentary(&row).map_err(StoreError::Other)
            }
            None => Err(StoreError::Other(anyhow::anyhow!(
                "insert returned no row"
            ))),
        }
    }

    fn row_to_commentary(row: &libsql::Row) -> Result<Commentary> {
        Ok(Commentary {
            id: row.get(0)?,
            match_id: row.get(1)?,
            minute: row.get(2)?,
            author: row.get(3)?,
            text: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::error::StoreError;
    use crate::matches::{CreateMatch, MatchStore};

    async fn seed_match(db: &Database) -> i64 {
        let store = MatchStore::new(db.connection());
        store
            .create(CreateMatch {
                home_team: "Arsenal".to_string(),
                away_team: "Spurs".to_string(),
                kickoff_at: None,
            })
            .await
            .unwrap()
            .id
    }

    fn entry(text: &str) -> CreateCommentary {
        CreateCommentary {
            text: text.to_string(),
            minute: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let db = Database::in_memory().await.unwrap();
        let match_id = seed_match(&db).await;
        let store = CommentaryStore::new(db.connection());

        let created = store.create(match_id, entry("Kickoff")).await.unwrap();
        assert_eq!(created.match_id, match_id);
        assert!(created.id >= 1);
        assert!(!created.created_at.is_empty());
    }

    #[tokio::test]
    async fn create_against_missing_match_is_a_foreign_key_violation() {
        let db = Database::in_memory().await.unwrap();
        let store = CommentaryStore::new(db.connection());

        let err = store.create(999, entry("Ghost match")).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation));

        // Nothing persisted for the missing match.
        let entries = store.list_by_match(999, 10).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first_and_respects_limit() {
        let db = Database::in_memory().await.unwrap();
        let match_id = seed_match(&db).await;
        let store = CommentaryStore::new(db.connection());

        for i in 0..5 {
            store
                .create(match_id, entry(&format!("Update {}", i)))
                .await
                .unwrap();
            // created_at has millisecond precision; keep inserts distinct.
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let entries = store.list_by_match(match_id, 3).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "Update 4");
        assert!(entries[0].created_at >= entries[1].created_at);
        assert!(entries[1].created_at >= entries[2].created_at);
    }

    #[tokio::test]
    async fn list_only_returns_entries_for_the_requested_match() {
        let db = Database::in_memory().await.unwrap();
        let first = seed_match(&db).await;
        let second = seed_match(&db).await;
        let store = CommentaryStore::new(db.connection());

        store.create(first, entry("First match")).await.unwrap();
        store.create(second, entry("Second match")).await.unwrap();

        let entries = store.list_by_match(first, 10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "First match");
    }

    #[tokio::test]
    async fn empty_list_is_a_success() {
        let db = Database::in_memory().await.unwrap();
        let match_id = seed_match(&db).await;
        let store = CommentaryStore::new(db.connection());

        let entries = store.list_by_match(match_id, 10).await.unwrap();
        assert!(entries.is_empty());
    }
}
