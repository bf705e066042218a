// ==========================================
// 经营驾驶舱 - 业务告警领域模型
// ==========================================
// 生命周期: 每个周期整体替换;列表顺序即规则评估顺序
// ==========================================

use crate::domain::types::{AlertRule, AlertSeverity};
use serde::{Deserialize, Serialize};

// ==========================================
// Alert - 业务告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub rule: AlertRule,            // 触发规则
    pub severity: AlertSeverity,    // 告警级别
    pub title: String,              // 标题
    pub message: String,            // 消息 (含插值数值)
    pub recommended_action: String, // 建议操作
}

/// 各级别告警数量 (告警角标)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertCounts {
    /// 统计告警列表
    pub fn tally(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut acc, alert| {
            match alert.severity {
                AlertSeverity::Critical => acc.critical += 1,
                AlertSeverity::Warning => acc.warning += 1,
                AlertSeverity::Info => acc.info += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info
    }
}
