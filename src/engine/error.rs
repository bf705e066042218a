// ==========================================
// 经营驾驶舱 - 引擎层错误类型
// ==========================================

use crate::domain::types::KpiName;
use thiserror::Error;

/// 引擎错误
///
/// 均为前置条件违反 (调用方错误),不可在本地恢复
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// KPI 集合缺少告警规则所需的记录
    #[error("KPI 记录缺失: {0} (KPI 集合必须由 KpiEngine 基于同一快照生成)")]
    MissingKpi(KpiName),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
