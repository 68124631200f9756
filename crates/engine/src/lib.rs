//! GameGraph engine library.
//!
//! This crate contains all server-side code for the GameGraph catalog
//! and recommendation service.
//!
//! ## Structure
//!
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;

pub use app::App;
