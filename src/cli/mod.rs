//! Command-line front end: argument parsing, the interactive shell and the
//! text/JSON renderers.
mod app;
mod args;
mod display;

pub use app::*;
pub use args::*;
pub use display::*;
