//! Neo4j user repository implementation.
//!
//! Manages users and the LIKES edge.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use gamegraph_domain::{User, UserRole};

use super::helpers::collect_rows;
use crate::infrastructure::ports::{RepoError, UserRepo};

pub struct Neo4jUserRepo {
    graph: Graph,
}

impl Neo4jUserRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl UserRepo for Neo4jUserRepo {
    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        let q = query(
            "MATCH (u:User)
            RETURN u.username AS username, u.role AS role
            ORDER BY username",
        );

        collect_rows(&self.graph, q, |row| {
            let username: String = row.get("username").map_err(RepoError::query)?;
            let role: String = row.get("role").map_err(RepoError::query)?;
            // An unrecognized role never grants privileges.
            let role = role.parse().unwrap_or(UserRole::User);
            Ok(User { username, role })
        })
        .await
    }

    /// Ids of the games a user likes, ordered by game title.
    ///
    /// No like-time is stored on the edge, so title order is the only
    /// deterministic ordering available.
    async fn list_likes(&self, username: &str) -> Result<Vec<i64>, RepoError> {
        let q = query(
            "MATCH (u:User {username: $username})-[:LIKES]->(g:Game)
            RETURN g.id AS id
            ORDER BY g.title",
        )
        .param("username", username.to_string());

        collect_rows(&self.graph, q, |row| {
            row.get("id").map_err(RepoError::query)
        })
        .await
    }

    /// Idempotent: MERGE never duplicates the edge, and a missing user
    /// or game matches nothing, leaving the store untouched.
    async fn add_like(&self, username: &str, game_id: i64) -> Result<(), RepoError> {
        let q = query(
            "MATCH (u:User {username: $username})
            MATCH (g:Game {id: $game_id})
            MERGE (u)-[:LIKES]->(g)",
        )
        .param("username", username.to_string())
        .param("game_id", game_id);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Removing an absent like is a no-op, not an error.
    async fn remove_like(&self, username: &str, game_id: i64) -> Result<(), RepoError> {
        let q = query(
            "MATCH (u:User {username: $username})-[r:LIKES]->(g:Game {id: $game_id})
            DELETE r",
        )
        .param("username", username.to_string())
        .param("game_id", game_id);

        self.graph.run(q).await?;
        Ok(())
    }
}
