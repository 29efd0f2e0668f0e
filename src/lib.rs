//! Personal portfolio library
//!
//! This library provides the session gate, the in-memory project catalog and
//! idea board, local storage for the session and theme preference, and the
//! command-line front end that renders the site's views.

mod catalog;
mod cli;
mod config;
mod contact;
mod errors;
mod helper;
mod idea;
mod local_storage;
mod project;
mod route;
mod seed;
mod session;
mod theme;
mod types;

// Re-export key components
pub use catalog::*;
pub use cli::*;
pub use config::*;
pub use contact::*;
pub use errors::*;
pub use helper::*;
pub use idea::*;
pub use local_storage::*;
pub use project::*;
pub use route::*;
pub use seed::*;
pub use session::*;
pub use theme::*;
pub use types::*;
