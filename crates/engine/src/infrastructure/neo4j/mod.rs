//! Neo4j database implementations.

use neo4rs::Graph;
use std::sync::Arc;

mod connection;
mod helpers;

mod game_repo;
mod recommendation;
mod taxonomy_repo;
mod user_repo;

#[cfg(test)]
pub(crate) mod test_harness;

pub use connection::{connect, ensure_schema};
pub use game_repo::Neo4jGameRepo;
pub use recommendation::{Neo4jRecommendationEngine, RECOMMENDATION_LIMIT};
pub use taxonomy_repo::Neo4jTaxonomyRepo;
pub use user_repo::Neo4jUserRepo;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub games: Arc<Neo4jGameRepo>,
    pub users: Arc<Neo4jUserRepo>,
    pub taxonomy: Arc<Neo4jTaxonomyRepo>,
    pub recommendations: Arc<Neo4jRecommendationEngine>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            games: Arc::new(Neo4jGameRepo::new(graph.clone())),
            users: Arc::new(Neo4jUserRepo::new(graph.clone())),
            taxonomy: Arc::new(Neo4jTaxonomyRepo::new(graph.clone())),
            recommendations: Arc::new(Neo4jRecommendationEngine::new(graph)),
        }
    }
}
