//! Neo4j connection management.

use anyhow::Result;
use neo4rs::{query, Graph};

/// Connect to Neo4j and verify the store is reachable.
///
/// Startup is fail-fast: the process must not serve traffic without a
/// reachable store, so any error here propagates out of `main`.
pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Graph> {
    let graph = Graph::new(uri, user, password).await?;
    graph.run(query("RETURN 1")).await?;
    tracing::info!("Connected to Neo4j at {}", uri);
    Ok(graph)
}

/// Initialize the database schema (create constraints and indexes).
///
/// Node labels, key properties and edge type names are part of the
/// persisted contract; renaming any of them is a breaking schema change.
pub async fn ensure_schema(graph: &Graph) -> Result<()> {
    // Create uniqueness constraints
    let constraints = [
        "CREATE CONSTRAINT game_id IF NOT EXISTS FOR (g:Game) REQUIRE g.id IS UNIQUE",
        "CREATE CONSTRAINT user_username IF NOT EXISTS FOR (u:User) REQUIRE u.username IS UNIQUE",
        "CREATE CONSTRAINT genre_name IF NOT EXISTS FOR (g:Genre) REQUIRE g.name IS UNIQUE",
        "CREATE CONSTRAINT developer_name IF NOT EXISTS FOR (d:Developer) REQUIRE d.name IS UNIQUE",
        "CREATE CONSTRAINT mechanic_name IF NOT EXISTS FOR (m:Mechanic) REQUIRE m.name IS UNIQUE",
    ];

    for constraint in constraints {
        if let Err(e) = graph.run(query(constraint)).await {
            tracing::warn!("Constraint creation warning: {}", e);
        }
    }

    // Create indexes for common queries
    let indexes = ["CREATE INDEX game_title IF NOT EXISTS FOR (g:Game) ON (g.title)"];

    for index in indexes {
        if let Err(e) = graph.run(query(index)).await {
            tracing::warn!("Index creation warning: {}", e);
        }
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
