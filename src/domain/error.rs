// ==========================================
// 经营驾驶舱 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 错误信息必须指明字段路径 (如 revenue.previous)
// ==========================================

use thiserror::Error;

/// 快照输入错误
///
/// 属于调用方错误 (前置条件违反): 立即失败,不做默认值替换,不重试
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("快照字段缺失: {field}")]
    MissingField { field: String },

    #[error("快照字段格式错误 ({field}): {reason}")]
    Malformed { field: String, reason: String },

    #[error("快照文档解析失败: {0}")]
    Parse(String),
}

impl SnapshotError {
    /// 出错的字段路径 (解析错误无字段)
    pub fn field(&self) -> Option<&str> {
        match self {
            SnapshotError::MissingField { field } | SnapshotError::Malformed { field, .. } => {
                Some(field)
            }
            SnapshotError::Parse(_) => None,
        }
    }
}
