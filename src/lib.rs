//! Snappy inventory library
//!
//! This library provides the item model, a key-value persisted item store
//! with create/read/update/delete operations, and the search, filter and
//! summary views built on top of it.

mod backend;
mod cli;
mod config;
mod context;
mod errors;
mod helper;
mod item;
mod query;
mod storage;
mod types;
mod validation;

// Re-export key components
pub use backend::*;
pub use cli::*;
pub use config::*;
pub use context::*;
pub use errors::*;
pub use helper::*;
pub use item::*;
pub use query::*;
pub use storage::*;
pub use types::*;
pub use validation::*;
