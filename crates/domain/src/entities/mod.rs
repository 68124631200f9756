//! Domain entities.

mod game;
mod user;

pub use game::Game;
pub use user::{InvalidRole, User, UserRole};
