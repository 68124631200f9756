//! Neo4j query and deserialization helpers.
//!
//! Generic row-collection helpers plus the shared game projection used
//! by every game-returning query.

use neo4rs::{Graph, Query, Row};

use gamegraph_domain::Game;

use crate::infrastructure::ports::RepoError;

/// Execute a query and collect results using a converter function.
pub async fn collect_rows<T, F>(graph: &Graph, query: Query, converter: F) -> Result<Vec<T>, RepoError>
where
    F: Fn(&Row) -> Result<T, RepoError>,
{
    let mut result = graph.execute(query).await?;

    let mut items = Vec::new();
    while let Some(row) = result.next().await? {
        items.push(converter(&row)?);
    }
    Ok(items)
}

/// Execute a query and return the first result using a converter function.
pub async fn get_first_row<T, F>(
    graph: &Graph,
    query: Query,
    converter: F,
) -> Result<Option<T>, RepoError>
where
    F: Fn(&Row) -> Result<T, RepoError>,
{
    let mut result = graph.execute(query).await?;

    if let Some(row) = result.next().await? {
        Ok(Some(converter(&row)?))
    } else {
        Ok(None)
    }
}

/// Convert a row carrying the denormalized game projection into a `Game`.
///
/// Expected columns: `id`, `title`, `release_year`, `about`,
/// `image_path`, plus the collected `genres`, `developers` and
/// `mechanics` name lists. Every game-returning query in this module
/// projects this exact shape.
pub fn row_to_game(row: &Row) -> Result<Game, RepoError> {
    let id: i64 = row.get("id").map_err(RepoError::query)?;
    let title: String = row.get("title").map_err(RepoError::query)?;
    let release_year: i64 = row.get("release_year").map_err(RepoError::query)?;
    let about: Option<String> = row.get("about").map_err(RepoError::query)?;
    let image_path: Option<String> = row.get("image_path").map_err(RepoError::query)?;
    let genres: Vec<String> = row.get("genres").map_err(RepoError::query)?;
    let developers: Vec<String> = row.get("developers").map_err(RepoError::query)?;
    let mechanics: Vec<String> = row.get("mechanics").map_err(RepoError::query)?;

    Ok(Game {
        id,
        title,
        release_year: release_year as i32,
        about,
        image_path,
        genres,
        developers,
        mechanics,
        similarity_score: None,
    })
}

/// The shared `RETURN` tail used by every game-returning query.
///
/// Assumes `g` is the game plus aggregated `genres`, `developers` and
/// `mechanics` lists are in scope.
pub const GAME_PROJECTION: &str = "RETURN g.id AS id, g.title AS title, \
     g.releaseYear AS release_year, g.about AS about, g.imagePath AS image_path, \
     genres, developers, mechanics";

/// The denormalization block: fan out to all attribute neighbors of `g`
/// and aggregate their distinct names, keeping games with no attributes.
pub const COLLECT_ATTRIBUTES: &str = "OPTIONAL MATCH (g)-[:HAS_GENRE]->(gen:Genre)
     OPTIONAL MATCH (g)-[:DEVELOPED_BY]->(dev:Developer)
     OPTIONAL MATCH (g)-[:HAS_MECHANIC]->(mech:Mechanic)
     WITH g, collect(DISTINCT gen.name) AS genres,
          collect(DISTINCT dev.name) AS developers,
          collect(DISTINCT mech.name) AS mechanics";
