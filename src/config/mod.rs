// ==========================================
// 经营驾驶舱 - 配置层
// ==========================================
// 职责: 运行配置加载,支持文件 + 环境变量覆写
// ==========================================

pub mod dashboard_config;

// 重导出核心配置
pub use dashboard_config::{env_keys, ConfigError, DashboardConfig, DEFAULT_REFRESH_INTERVAL_SECS};
