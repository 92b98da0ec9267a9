//! Compatibility matrix operations.
//!
//! Links pair a YBA version string with a YBDB version string. Lookups join
//! on string equality only, so duplicate or malformed version strings
//! silently produce duplicate or missing links.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};

use crate::db::release::YbdbRelease;
use crate::error::StorageError;

/// Bulk insert request: every (yba, ybdb) pair in the Cartesian product of
/// the two lists becomes one link row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    pub yba_versions: Vec<String>,
    pub ybdb_versions: Vec<String>,
}

/// Lookup request for the YBDB releases compatible with one YBA version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityQuery {
    pub yba_version: String,
}

/// Compatibility link operations
pub struct CompatibilityService;

impl CompatibilityService {
    /// Insert one link row per (yba, ybdb) pair in the Cartesian product.
    ///
    /// Deliberately NOT transactional: pairs are inserted one at a time in
    /// list order, and the first failure returns immediately with earlier
    /// pairs already committed and the remainder absent. Callers must not
    /// assume all-or-nothing semantics.
    pub async fn insert(
        pool: &PgPool,
        matrix: &CompatibilityMatrix,
    ) -> std::result::Result<(), StorageError> {
        let query = r#"
            INSERT INTO yba_ybdb_compatibility (yba_version, ybdb_version)
            VALUES ($1, $2)
        "#;

        for yba_version in &matrix.yba_versions {
            for ybdb_version in &matrix.ybdb_versions {
                sqlx::query(query)
                    .bind(yba_version)
                    .bind(ybdb_version)
                    .execute(pool)
                    .await
                    .map_err(|e| StorageError::Query {
                        message: e.to_string(),
                    })?;
            }
        }

        tracing::info!(
            "Inserted compatibility links for {} yba x {} ybdb versions",
            matrix.yba_versions.len(),
            matrix.ybdb_versions.len()
        );
        Ok(())
    }

    /// The YBDB releases linked to `yba_version`.
    ///
    /// Returns an empty vec (never null on the wire) when no links match.
    /// No ORDER BY is imposed; row order is whatever the join produces.
    pub async fn compatible_ybdb(
        pool: &PgPool,
        yba_version: &str,
    ) -> std::result::Result<Vec<YbdbRelease>, StorageError> {
        let query = r#"
            SELECT ybdb.version, ybdb.type, ybdb.architecture, ybdb.platform,
                   ybdb.download_url, ybdb.commit, ybdb.branch
            FROM ybdb
            INNER JOIN yba_ybdb_compatibility
                ON ybdb.version = yba_ybdb_compatibility.ybdb_version
            WHERE yba_ybdb_compatibility.yba_version = $1
        "#;

        let rows = sqlx::query(query)
            .bind(yba_version)
            .fetch_all(pool)
            .await
            .map_err(|e| StorageError::Query {
                message: e.to_string(),
            })?;

        let mut releases = Vec::with_capacity(rows.len());
        for row in rows {
            releases.push(YbdbRelease {
                version: row.get("version"),
                release_type: row.get("type"),
                architecture: row.get("architecture"),
                platform: row.get("platform"),
                download_url: row.get("download_url"),
                commit: row.get("commit"),
                branch: row.get("branch"),
            });
        }

        Ok(releases)
    }
}
