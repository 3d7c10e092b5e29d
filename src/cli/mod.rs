//! Command-line front end for the inventory store.

mod app;
mod args;

pub use app::*;
pub use args::*;
