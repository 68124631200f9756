//! GameGraph domain types.
//!
//! Entities and value objects shared between the engine and its API
//! surface. These are plain data types - all persistence concerns live
//! in the engine's infrastructure layer.

pub mod entities;
pub mod value_objects;

pub use entities::{Game, User, UserRole};
pub use value_objects::normalize_image_path;
