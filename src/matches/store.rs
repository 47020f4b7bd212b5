use anyhow::Result;
use libsql::Connection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatch {
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: Option<String>,
}

pub struct MatchStore<'a> {
    conn: &'a Connection,
}

impl<'a> MatchStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: CreateMatch) -> Result<Match> {
        let query = r#"
            INSERT INTO matches (home_team, away_team, kickoff_at)
            VALUES (?, ?, ?)
            RETURNING id, home_team, away_team, kickoff_at, created_at
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![input.home_team, input.away_team, input.kickoff_at],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Self::row_to_match(&row)?)
        } else {
            anyhow::bail!("Failed to create match")
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Match>> {
        let query = r#"
            SELECT id, home_team, away_team, kickoff_at, created_at
            FROM matches WHERE id = ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_match(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Match>> {
        let query = r#"
            SELECT id, home_team, away_team, kickoff_at, created_at
            FROM matches
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![limit]).await?;

        let mut matches = Vec::new();
        while let Some(row) = rows.next().await? {
            matches.push(Self::row_to_match(&row)?);
        }

        Ok(matches)
    }

    fn row_to_match(row: &libsql::Row) -> Result<Match> {
        Ok(Match {
            id: row.get(0)?,
            home_team: row.get(1)?,
            away_team: row.get(2)?,
            kickoff_at: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
