//! Record store for release metadata and the compatibility matrix.
//!
//! Three relations live in PostgreSQL: `yba` (product A releases), `ybdb`
//! (product B releases) and `yba_ybdb_compatibility` (many-to-many links
//! between their version strings). Rows are only ever inserted; nothing in
//! this system updates or deletes them.

pub mod compatibility;
pub mod connection;
pub mod release;

pub use compatibility::{CompatibilityMatrix, CompatibilityQuery, CompatibilityService};
pub use connection::{connect, migrate};
pub use release::{ReleaseService, YbaRelease, YbdbRelease};
