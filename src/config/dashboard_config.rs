// ==========================================
// 经营驾驶舱 - 运行配置
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写、校验
// 存储: JSON 文件 (默认 <config_dir>/executive-kpi/config.json)
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

use crate::i18n::{is_supported, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键 (环境变量)
// ==========================================
pub mod env_keys {
    pub const REFRESH_SECS: &str = "EXEC_KPI_REFRESH_SECS";
    pub const LOCALE: &str = "EXEC_KPI_LOCALE";
    pub const SNAPSHOT: &str = "EXEC_KPI_SNAPSHOT";
}

/// 默认刷新间隔 (5 分钟)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

/// 配置目录名
const CONFIG_DIR_NAME: &str = "executive-kpi";
const CONFIG_FILE_NAME: &str = "config.json";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({path}): {message}")]
    Parse { path: String, message: String },

    #[error("配置项无效 ({key}): {reason}")]
    Invalid { key: String, reason: String },
}

// ==========================================
// DashboardConfig - 驾驶舱配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 刷新间隔 (秒)
    pub refresh_interval_secs: u64,

    /// 告警文案语言 (en / zh-CN)
    pub locale: String,

    /// 快照 JSON 文件路径;为空时使用内置基准快照
    pub snapshot_path: Option<PathBuf>,

    /// 日志过滤器 (RUST_LOG 优先)
    pub log_filter: String,

    /// 经营摘要导出目录;为空时不导出
    pub summary_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            locale: DEFAULT_LOCALE.to_string(),
            snapshot_path: None,
            log_filter: "info".to_string(),
            summary_dir: None,
        }
    }
}

impl DashboardConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从 JSON 文件加载 (未出现的字段取默认值)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: DashboardConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// 加载默认位置的配置文件,不存在时使用内置默认值;随后应用环境变量覆写
    pub fn load_default() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };

        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 应用覆写
    ///
    /// `lookup` 按环境变量名返回覆写值 (便于测试注入)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(env_keys::REFRESH_SECS) {
            self.refresh_interval_secs =
                raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: env_keys::REFRESH_SECS.to_string(),
                    reason: format!("无法解析为秒数 '{}': {}", raw, e),
                })?;
        }

        if let Some(raw) = lookup(env_keys::LOCALE) {
            self.locale = raw.trim().to_string();
        }

        if let Some(raw) = lookup(env_keys::SNAPSHOT) {
            let trimmed = raw.trim();
            self.snapshot_path = if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            };
        }

        Ok(self)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "refresh_interval_secs".to_string(),
                reason: "刷新间隔必须大于 0".to_string(),
            });
        }

        if !is_supported(&self.locale) {
            return Err(ConfigError::Invalid {
                key: "locale".to_string(),
                reason: format!(
                    "不支持的语言 '{}' (可选: {})",
                    self.locale,
                    SUPPORTED_LOCALES.join(", ")
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval_secs, 300);
        assert_eq!(config.locale, "en");
        assert!(config.snapshot_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::default()
            .with_overrides(lookup_from(&[
                (env_keys::REFRESH_SECS, "60"),
                (env_keys::LOCALE, "zh-CN"),
                (env_keys::SNAPSHOT, "/tmp/snapshot.json"),
            ]))
            .unwrap();

        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/snapshot.json")));
    }

    #[test]
    fn test_invalid_refresh_override() {
        let result = DashboardConfig::default()
            .with_overrides(lookup_from(&[(env_keys::REFRESH_SECS, "five")]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_interval_and_unknown_locale() {
        let mut config = DashboardConfig::default();
        config.refresh_interval_secs = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.locale = "fr".to_string();
        match config.validate() {
            Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "locale"),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }
}
