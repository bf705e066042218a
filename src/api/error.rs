// ==========================================
// 经营驾驶舱 - API层错误类型
// ==========================================
// 职责: 汇总各层错误,转换为宿主可展示的错误消息
// 约定: 所有错误信息必须包含显式原因
// ==========================================

use crate::api::provider::ProviderError;
use crate::config::ConfigError;
use crate::domain::error::SnapshotError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误 (前置条件违反)
    // ==========================================
    #[error("快照无效: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("引擎前置条件违反: {0}")]
    Engine(#[from] EngineError),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 外部协作方错误
    // ==========================================
    #[error("快照获取失败: {0}")]
    Provider(#[from] ProviderError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("经营摘要导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
