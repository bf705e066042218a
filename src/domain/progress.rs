// ==========================================
// 经营驾驶舱 - 年度目标进度领域模型
// ==========================================
// 用途: 驾驶舱进度条 (实际/目标)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 目标类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Revenue, // 年度营收目标
    Profit,  // 年度利润目标
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Revenue => write!(f, "revenue"),
            TargetKind::Profit => write!(f, "profit"),
        }
    }
}

// ==========================================
// TargetGauge - 目标进度
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGauge {
    pub kind: TargetKind,     // 目标类别
    pub actual: f64,          // 年初至今实际值
    pub target: f64,          // 年度目标值
    pub percent: f64,         // 原始进度百分比 (可超过 100)
    pub display_percent: f64, // 进度条填充 [0, 100]
}

impl TargetGauge {
    /// 是否已达成目标
    pub fn is_achieved(&self) -> bool {
        self.percent >= 100.0
    }
}
