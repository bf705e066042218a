// ==========================================
// 经营驾驶舱 - 快照提供者
// ==========================================
// 职责: 每个刷新周期向宿主提供一份快照
// 实现者:
//   - StaticSnapshotProvider: 固定快照 (默认基准数据)
//   - FileSnapshotProvider:   每周期重新读取 JSON 文件
// 说明: 随机模拟数据生成器属于外部协作方,不在本 crate 内
// ==========================================

use crate::domain::error::SnapshotError;
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 快照获取错误
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("快照文件读取失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

// ==========================================
// SnapshotProvider Trait
// ==========================================
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// 获取本周期快照
    async fn fetch(&self) -> Result<Snapshot, ProviderError>;

    /// 数据来源描述 (用于日志)
    fn describe(&self) -> String;
}

// ==========================================
// StaticSnapshotProvider - 固定快照
// ==========================================
#[derive(Debug, Clone)]
pub struct StaticSnapshotProvider {
    snapshot: Snapshot,
}

impl StaticSnapshotProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// 内置基准快照
    pub fn baseline() -> Self {
        Self::new(Snapshot::baseline())
    }
}

#[async_trait]
impl SnapshotProvider for StaticSnapshotProvider {
    async fn fetch(&self) -> Result<Snapshot, ProviderError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

// ==========================================
// FileSnapshotProvider - JSON 文件快照
// ==========================================
#[derive(Debug, Clone)]
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotProvider for FileSnapshotProvider {
    async fn fetch(&self) -> Result<Snapshot, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(Snapshot::from_json_str(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticSnapshotProvider::baseline();
        assert_eq!(provider.fetch().await.unwrap(), Snapshot::baseline());
    }

    #[tokio::test]
    async fn test_file_provider_reads_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Snapshot::baseline()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let provider = FileSnapshotProvider::new(file.path());
        assert_eq!(provider.fetch().await.unwrap(), Snapshot::baseline());
        assert!(provider.describe().starts_with("file:"));
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileSnapshotProvider::new(dir.path().join("absent.json"));
        assert!(matches!(
            provider.fetch().await,
            Err(ProviderError::Read { .. })
        ));
    }

    #[tokio::test]
    async fn test_file_provider_reports_missing_field() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"revenue": {"current": 1}}"#).unwrap();

        let provider = FileSnapshotProvider::new(file.path());
        match provider.fetch().await {
            Err(ProviderError::Snapshot(SnapshotError::MissingField { field })) => {
                assert_eq!(field, "revenue.previous")
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }
}
