//! Infrastructure layer - External systems integration
//!
//! Handles database connections, migrations and the persistence
//! repositories consumed by the services layer.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UpdateTokenRepository, UserLookupRepository, UserStore};
