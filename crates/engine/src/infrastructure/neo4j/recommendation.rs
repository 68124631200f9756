//! Feature-based recommendation engine.
//!
//! Walks `liked game -> shared attribute -> candidate` paths over the
//! three attribute edge types and scores every candidate the user does
//! not already like. Each traversed path contributes a weight keyed by
//! the candidate-side edge type: shared mechanics weigh 3, a shared
//! developer 2, shared genres 1. Multiplicity matters - the same
//! attribute reached from two liked games counts twice.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use gamegraph_domain::Game;

use super::helpers::{collect_rows, row_to_game};
use crate::infrastructure::ports::{RecommendationPort, RepoError};

/// Result-list cap used by the API layer.
pub const RECOMMENDATION_LIMIT: i64 = 10;

pub struct Neo4jRecommendationEngine {
    graph: Graph,
}

impl Neo4jRecommendationEngine {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl RecommendationPort for Neo4jRecommendationEngine {
    /// Rank unliked games by weighted shared-attribute score.
    ///
    /// Liked games never appear in the output. A user with no likes
    /// (or an unknown username) gets an empty list - no popularity or
    /// random fallback.
    async fn recommend(&self, username: &str, limit: i64) -> Result<Vec<Game>, RepoError> {
        let q = query(
            "MATCH (u:User {username: $username})-[:LIKES]->(liked:Game)
            MATCH (liked)-[r:HAS_GENRE|HAS_MECHANIC|DEVELOPED_BY]->(feature)
                  <-[r2:HAS_GENRE|HAS_MECHANIC|DEVELOPED_BY]-(g:Game)
            WHERE NOT (u)-[:LIKES]->(g)

            WITH g,
                 sum(CASE type(r2)
                    WHEN 'HAS_MECHANIC' THEN 3
                    WHEN 'DEVELOPED_BY' THEN 2
                    WHEN 'HAS_GENRE'    THEN 1
                    ELSE 1
                 END) AS score

            ORDER BY score DESC, g.title ASC
            LIMIT $limit

            OPTIONAL MATCH (g)-[:HAS_GENRE]->(gen:Genre)
            OPTIONAL MATCH (g)-[:DEVELOPED_BY]->(dev:Developer)
            OPTIONAL MATCH (g)-[:HAS_MECHANIC]->(mech:Mechanic)

            WITH g, score,
                 collect(DISTINCT gen.name) AS genres,
                 collect(DISTINCT dev.name) AS developers,
                 collect(DISTINCT mech.name) AS mechanics

            RETURN g.id AS id, g.title AS title, g.releaseYear AS release_year,
                   g.about AS about, g.imagePath AS image_path,
                   genres, developers, mechanics, score",
        )
        .param("username", username.to_string())
        .param("limit", limit);

        collect_rows(&self.graph, q, |row| {
            let mut game = row_to_game(row)?;
            game.similarity_score = Some(row.get("score").map_err(RepoError::query)?);
            Ok(game)
        })
        .await
    }
}
