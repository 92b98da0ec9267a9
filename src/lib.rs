//! Infinity API library
//!
//! Records release metadata for two product lines (YBA and YBDB) and a
//! many-to-many compatibility matrix between their version strings, backed
//! by PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::Config;
pub use error::{ApiError, Result, StorageError};
pub use router::{AppState, build_router};
