//! Neo4j game repository implementation.
//!
//! Handles catalog search, lookup and the admin-gated write path.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use gamegraph_domain::{normalize_image_path, Game};

use super::helpers::{collect_rows, get_first_row, row_to_game, COLLECT_ATTRIBUTES, GAME_PROJECTION};
use crate::infrastructure::ports::{GameRepo, RepoError, SearchFilter};

pub struct Neo4jGameRepo {
    graph: Graph,
}

impl Neo4jGameRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Role check for the write path.
    ///
    /// This is a separate query from the mutation, so a role change
    /// landing between the two is visible to the mutation only on the
    /// next call (accepted race).
    async fn is_admin(&self, username: &str) -> Result<bool, RepoError> {
        let q = query(
            "MATCH (u:User {username: $username})
            RETURN coalesce(u.role = 'admin', false) AS is_admin",
        )
        .param("username", username.to_string());

        let mut result = self.graph.execute(q).await?;

        if let Some(row) = result.next().await? {
            row.get("is_admin").map_err(RepoError::query)
        } else {
            Ok(false)
        }
    }

    async fn require_admin(&self, username: &str) -> Result<(), RepoError> {
        if self.is_admin(username).await? {
            Ok(())
        } else {
            Err(RepoError::forbidden(
                "only admins can modify the catalog",
            ))
        }
    }
}

#[async_trait]
impl GameRepo for Neo4jGameRepo {
    /// Multi-criteria intersection search.
    ///
    /// Each filter group is an AND across its values; groups combine
    /// with AND between them; empty groups impose no constraint.
    async fn search(
        &self,
        filter: SearchFilter,
        max_results: i64,
    ) -> Result<Vec<Game>, RepoError> {
        let cypher = format!(
            "MATCH (g:Game)
            WHERE ($search_text = '' OR toLower(g.title) CONTAINS toLower($search_text))
              AND (size($genres) = 0 OR all(genre_name IN $genres
                   WHERE EXISTS {{ (g)-[:HAS_GENRE]->(:Genre {{name: genre_name}}) }}))
              AND (size($developers) = 0 OR all(dev_name IN $developers
                   WHERE EXISTS {{ (g)-[:DEVELOPED_BY]->(:Developer {{name: dev_name}}) }}))
              AND (size($mechanics) = 0 OR all(mech_name IN $mechanics
                   WHERE EXISTS {{ (g)-[:HAS_MECHANIC]->(:Mechanic {{name: mech_name}}) }}))
            {COLLECT_ATTRIBUTES}
            {GAME_PROJECTION}
            ORDER BY title ASC
            LIMIT $limit"
        );

        let q = query(&cypher)
            .param("search_text", filter.text.unwrap_or_default())
            .param("genres", filter.genres)
            .param("developers", filter.developers)
            .param("mechanics", filter.mechanics)
            .param("limit", max_results);

        collect_rows(&self.graph, q, row_to_game).await
    }

    /// Get a game by id with its denormalized attribute sets.
    async fn get(&self, id: i64) -> Result<Option<Game>, RepoError> {
        let cypher = format!(
            "MATCH (g:Game {{id: $id}})
            {COLLECT_ATTRIBUTES}
            {GAME_PROJECTION}"
        );

        let q = query(&cypher).param("id", id);

        get_first_row(&self.graph, q, row_to_game).await
    }

    /// List all games ordered by title.
    async fn list(&self, max_results: i64) -> Result<Vec<Game>, RepoError> {
        let cypher = format!(
            "MATCH (g:Game)
            {COLLECT_ATTRIBUTES}
            {GAME_PROJECTION}
            ORDER BY title ASC
            LIMIT $limit"
        );

        let q = query(&cypher).param("limit", max_results);

        collect_rows(&self.graph, q, row_to_game).await
    }

    /// Create or update a game and replace its attribute edge set.
    ///
    /// One compound query: get-or-create the game by id, overwrite its
    /// scalars, drop every outgoing attribute edge, then relink the
    /// supplied developer/genres/mechanics (get-or-create by name) and
    /// re-read the denormalized result. Lists not supplied by the
    /// caller mean "replace with empty", not "leave unchanged".
    async fn upsert(
        &self,
        game: &Game,
        developer_name: Option<String>,
        genre_names: Vec<String>,
        mechanic_names: Vec<String>,
        performed_by: &str,
    ) -> Result<Game, RepoError> {
        self.require_admin(performed_by).await?;

        let image_path = normalize_image_path(game.image_path.as_deref());
        let developer_name = developer_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let cypher = format!(
            "MERGE (g:Game {{id: $id}})
            SET g.title = $title,
                g.releaseYear = $release_year,
                g.about = CASE WHEN $about = '' THEN null ELSE $about END,
                g.imagePath = CASE WHEN $image_path = '' THEN null ELSE $image_path END

            // Drop the old attribute edge set before relinking
            WITH g
            OPTIONAL MATCH (g)-[old:DEVELOPED_BY|HAS_GENRE|HAS_MECHANIC]->()
            DELETE old

            WITH DISTINCT g
            FOREACH (dev_name IN CASE WHEN $developer_name = '' THEN [] ELSE [$developer_name] END |
                MERGE (d:Developer {{name: dev_name}})
                MERGE (g)-[:DEVELOPED_BY]->(d))
            FOREACH (genre_name IN $genre_names |
                MERGE (gen:Genre {{name: genre_name}})
                MERGE (g)-[:HAS_GENRE]->(gen))
            FOREACH (mech_name IN $mechanic_names |
                MERGE (m:Mechanic {{name: mech_name}})
                MERGE (g)-[:HAS_MECHANIC]->(m))

            WITH g
            {COLLECT_ATTRIBUTES}
            {GAME_PROJECTION}
            LIMIT 1"
        );

        let q = query(&cypher)
            .param("id", game.id)
            .param("title", game.title.clone())
            .param("release_year", game.release_year as i64)
            .param("about", game.about.clone().unwrap_or_default())
            .param("image_path", image_path.unwrap_or_default())
            .param("developer_name", developer_name.unwrap_or_default())
            .param("genre_names", genre_names)
            .param("mechanic_names", mechanic_names);

        let saved = get_first_row(&self.graph, q, row_to_game).await?;

        tracing::debug!("Upserted game: {}", game.id);
        saved.ok_or_else(|| RepoError::Query("upsert returned no row".to_string()))
    }

    /// Delete a game and every edge touching it.
    ///
    /// Deleting a missing id matches nothing and succeeds (idempotent).
    async fn delete(&self, id: i64, performed_by: &str) -> Result<(), RepoError> {
        self.require_admin(performed_by).await?;

        let q = query(
            "MATCH (g:Game {id: $id})
            DETACH DELETE g",
        )
        .param("id", id);

        self.graph.run(q).await?;

        tracing::debug!("Deleted game: {}", id);
        Ok(())
    }
}
