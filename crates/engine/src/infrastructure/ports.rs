//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for database access (could swap Neo4j for
//! another property graph store) and to keep HTTP handlers testable
//! without a running database.

use async_trait::async_trait;
use gamegraph_domain::{Game, User};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Query error: {0}")]
    Query(String),
}

impl RepoError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn query(e: impl std::fmt::Display) -> Self {
        Self::Query(e.to_string())
    }
}

impl From<neo4rs::Error> for RepoError {
    fn from(e: neo4rs::Error) -> Self {
        match e {
            // The store dropping mid-operation is the one error class
            // that is not a programming/schema defect.
            neo4rs::Error::ConnectionError => Self::Connection("connection lost".to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// Search criteria for the catalog.
///
/// Every field is a conjunction: a game matches when its title contains
/// `text` (if any) AND it carries every listed genre AND every listed
/// developer AND every listed mechanic. Empty fields impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub text: Option<String>,
    pub genres: Vec<String>,
    pub developers: Vec<String>,
    pub mechanics: Vec<String>,
}

// =============================================================================
// Database Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    // Queries
    async fn search(&self, filter: SearchFilter, max_results: i64)
        -> Result<Vec<Game>, RepoError>;
    async fn get(&self, id: i64) -> Result<Option<Game>, RepoError>;
    async fn list(&self, max_results: i64) -> Result<Vec<Game>, RepoError>;

    // Writes (admin-gated)
    async fn upsert(
        &self,
        game: &Game,
        developer_name: Option<String>,
        genre_names: Vec<String>,
        mechanic_names: Vec<String>,
        performed_by: &str,
    ) -> Result<Game, RepoError>;
    async fn delete(&self, id: i64, performed_by: &str) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;
    async fn list_likes(&self, username: &str) -> Result<Vec<i64>, RepoError>;

    // Both are lenient: a missing user or game matches nothing and the
    // operation succeeds as a no-op.
    async fn add_like(&self, username: &str, game_id: i64) -> Result<(), RepoError>;
    async fn remove_like(&self, username: &str, game_id: i64) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaxonomyRepo: Send + Sync {
    async fn list_genres(&self) -> Result<Vec<String>, RepoError>;
    async fn list_developers(&self) -> Result<Vec<String>, RepoError>;
    async fn list_mechanics(&self) -> Result<Vec<String>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationPort: Send + Sync {
    /// Rank unliked games by weighted shared-attribute score for the
    /// given user. Returns an empty list for users with no likes.
    async fn recommend(&self, username: &str, limit: i64) -> Result<Vec<Game>, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_helper_wraps_any_display_error() {
        let err = RepoError::query("parameter mismatch");
        assert!(matches!(err, RepoError::Query(msg) if msg == "parameter mismatch"));
    }

    #[test]
    fn connection_loss_maps_to_the_connection_variant() {
        let err: RepoError = neo4rs::Error::ConnectionError.into();
        assert!(matches!(err, RepoError::Connection(_)));
    }
}
