//! Neo4j taxonomy repository implementation.
//!
//! Lists the distinct universe of attribute values for filter UIs.
//! Names are unique by constraint, so plain ordered projections
//! suffice.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use super::helpers::collect_rows;
use crate::infrastructure::ports::{RepoError, TaxonomyRepo};

pub struct Neo4jTaxonomyRepo {
    graph: Graph,
}

impl Neo4jTaxonomyRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn list_names(&self, cypher: &str) -> Result<Vec<String>, RepoError> {
        collect_rows(&self.graph, query(cypher), |row| {
            row.get("name").map_err(RepoError::query)
        })
        .await
    }
}

#[async_trait]
impl TaxonomyRepo for Neo4jTaxonomyRepo {
    async fn list_genres(&self) -> Result<Vec<String>, RepoError> {
        self.list_names("MATCH (g:Genre) RETURN g.name AS name ORDER BY name")
            .await
    }

    async fn list_developers(&self) -> Result<Vec<String>, RepoError> {
        self.list_names("MATCH (d:Developer) RETURN d.name AS name ORDER BY name")
            .await
    }

    async fn list_mechanics(&self) -> Result<Vec<String>, RepoError> {
        self.list_names("MATCH (m:Mechanic) RETURN m.name AS name ORDER BY name")
            .await
    }
}
