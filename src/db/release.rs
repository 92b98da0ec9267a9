//! Release record models and insert operations

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::StorageError;

/// A YBA release record. The version string is the natural key; no
/// deduplication happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YbaRelease {
    pub version: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub architecture: String,
    pub platform: String,
    pub commit: String,
    pub branch: String,
}

/// A YBDB release record, same shape as [`YbaRelease`] plus a download URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YbdbRelease {
    pub version: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub architecture: String,
    pub platform: String,
    pub download_url: String,
    pub commit: String,
    pub branch: String,
}

/// Release insert operations
pub struct ReleaseService;

impl ReleaseService {
    /// Append one YBA release row
    pub async fn insert_yba(
        pool: &PgPool,
        release: &YbaRelease,
    ) -> std::result::Result<(), StorageError> {
        let query = r#"
            INSERT INTO yba (version, type, architecture, platform, commit, branch)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(&release.version)
            .bind(&release.release_type)
            .bind(&release.architecture)
            .bind(&release.platform)
            .bind(&release.commit)
            .bind(&release.branch)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Query {
                message: e.to_string(),
            })?;

        tracing::info!("Inserted yba release: {}", release.version);
        Ok(())
    }

    /// Append one YBDB release row
    pub async fn insert_ybdb(
        pool: &PgPool,
        release: &YbdbRelease,
    ) -> std::result::Result<(), StorageError> {
        let query = r#"
            INSERT INTO ybdb (version, type, architecture, platform, download_url, commit, branch)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(&release.version)
            .bind(&release.release_type)
            .bind(&release.architecture)
            .bind(&release.platform)
            .bind(&release.download_url)
            .bind(&release.commit)
            .bind(&release.branch)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Query {
                message: e.to_string(),
            })?;

        tracing::info!("Inserted ybdb release: {}", release.version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_type_maps_to_type_on_the_wire() {
        let release: YbaRelease = serde_json::from_str(
            r#"{"version":"1.0","type":"preview","architecture":"x86_64",
                "platform":"linux","commit":"abc","branch":"main"}"#,
        )
        .unwrap();
        assert_eq!(release.release_type, "preview");

        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(json["type"], "preview");
        assert!(json.get("release_type").is_none());
    }

    #[test]
    fn ybdb_release_round_trips_download_url() {
        let release = YbdbRelease {
            version: "2.20.0.0".into(),
            release_type: "stable".into(),
            architecture: "aarch64".into(),
            platform: "linux".into(),
            download_url: "http://example.com/download".into(),
            commit: "deadbeef".into(),
            branch: "2.20".into(),
        };
        let json = serde_json::to_string(&release).unwrap();
        let back: YbdbRelease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, release);
    }
}
