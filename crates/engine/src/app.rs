//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::neo4j::Neo4jRepositories;
use crate::infrastructure::ports::{GameRepo, RecommendationPort, TaxonomyRepo, UserRepo};

/// Main application state.
///
/// Holds the port implementations plus the shared API secret. Passed to
/// HTTP handlers via Axum state; handlers depend on the port traits
/// only, never on the Neo4j types.
pub struct App {
    pub games: Arc<dyn GameRepo>,
    pub users: Arc<dyn UserRepo>,
    pub taxonomy: Arc<dyn TaxonomyRepo>,
    pub recommendations: Arc<dyn RecommendationPort>,
    pub api_key: String,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Neo4jRepositories, api_key: impl Into<String>) -> Self {
        Self {
            games: repos.games,
            users: repos.users,
            taxonomy: repos.taxonomy,
            recommendations: repos.recommendations,
            api_key: api_key.into(),
        }
    }
}
