//! Game entity - the catalog item being searched and recommended.
//!
//! Games are nodes in the graph. Descriptive attributes are modeled as
//! shared nodes reachable through typed edges:
//!
//! ```cypher
//! (game:Game)-[:HAS_GENRE]->(genre:Genre)
//! (game:Game)-[:DEVELOPED_BY]->(developer:Developer)
//! (game:Game)-[:HAS_MECHANIC]->(mechanic:Mechanic)
//! (user:User)-[:LIKES]->(game:Game)
//! ```
//!
//! The `genres`/`developers`/`mechanics` fields carry the denormalized
//! attribute names as read back from the graph; they are projections of
//! the edge set, not independent state.

use serde::{Deserialize, Serialize};

/// A catalog entry with its denormalized attribute sets.
///
/// This is a data-carrying struct with no invariants to protect. All
/// fields are public; any combination of values is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    /// Free-form description shown on the detail page.
    #[serde(default)]
    pub about: Option<String>,
    /// Local cover image path (e.g. "/images/covers/alpha.jpg").
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub mechanics: Vec<String>,
    /// Weighted shared-attribute score, present only on recommendation
    /// results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<i64>,
}

impl Game {
    pub fn new(id: i64, title: impl Into<String>, release_year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            release_year,
            about: None,
            image_path: None,
            genres: Vec::new(),
            developers: Vec::new(),
            mechanics: Vec::new(),
            similarity_score: None,
        }
    }

    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let game = Game::new(1, "Alpha", 2020).with_image_path("/images/alpha.png");
        let json = serde_json::to_value(&game).expect("serialize");

        assert_eq!(json["releaseYear"], 2020);
        assert_eq!(json["imagePath"], "/images/alpha.png");
        // Absent score is omitted entirely, not serialized as null.
        assert!(json.get("similarityScore").is_none());
    }

    #[test]
    fn deserializes_without_attribute_lists() {
        let game: Game =
            serde_json::from_str(r#"{"id":7,"title":"Beta","releaseYear":1999}"#).expect("parse");

        assert_eq!(game.id, 7);
        assert!(game.genres.is_empty());
        assert!(game.about.is_none());
    }
}
