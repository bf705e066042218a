// ==========================================
// 经营驾驶舱 - 领域类型定义
// ==========================================
// 职责: KPI 名称、趋势、状态、告警级别等枚举
// 序列化格式: 与前端展示层的 CSS class 一致 (小写)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// KPI 名称 (KPI Name)
// ==========================================
// 顺序即计算顺序,也是输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KpiName {
    RevenueGrowth,  // 营收环比增长
    ProfitGrowth,   // 利润环比增长
    CashFlowHealth, // 现金流健康度
    TargetProgress, // 年度目标达成
}

impl KpiName {
    /// 全部 KPI,按计算顺序
    pub const ALL: [KpiName; 4] = [
        KpiName::RevenueGrowth,
        KpiName::ProfitGrowth,
        KpiName::CashFlowHealth,
        KpiName::TargetProgress,
    ];
}

impl fmt::Display for KpiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiName::RevenueGrowth => write!(f, "revenueGrowth"),
            KpiName::ProfitGrowth => write!(f, "profitGrowth"),
            KpiName::CashFlowHealth => write!(f, "cashFlowHealth"),
            KpiName::TargetProgress => write!(f, "targetProgress"),
        }
    }
}

// ==========================================
// 趋势 (Trend)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive, // 向好
    Negative, // 下滑
    Neutral,  // 持平/未达关注线
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Positive => write!(f, "positive"),
            Trend::Negative => write!(f, "negative"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

// ==========================================
// KPI 状态 (KPI Status)
// ==========================================
// 声明顺序即排序: Critical < Concern < Good < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Critical,  // 危急
    Concern,   // 需关注
    Good,      // 良好
    Excellent, // 优秀
}

impl KpiStatus {
    /// 状态等级 (数值越大越好)
    pub fn rank(&self) -> u8 {
        match self {
            KpiStatus::Critical => 0,
            KpiStatus::Concern => 1,
            KpiStatus::Good => 2,
            KpiStatus::Excellent => 3,
        }
    }
}

impl fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiStatus::Critical => write!(f, "critical"),
            KpiStatus::Concern => write!(f, "concern"),
            KpiStatus::Good => write!(f, "good"),
            KpiStatus::Excellent => write!(f, "excellent"),
        }
    }
}

// ==========================================
// 告警级别 (Alert Severity)
// ==========================================
// 声明顺序即排序: Info < Warning < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,     // 提示
    Warning,  // 警告
    Critical, // 严重
}

impl AlertSeverity {
    /// 转换为字符串 (与展示层 class 一致)
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 告警规则 (Alert Rule)
// ==========================================
// 声明顺序即评估顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertRule {
    RevenueDecline,        // 营收下滑
    CashFlowAttention,     // 现金流关注
    TargetAchievementRisk, // 目标达成风险
    OperationalEfficiency, // 运营效率
}

impl AlertRule {
    /// 全部规则,按评估顺序
    pub const ALL: [AlertRule; 4] = [
        AlertRule::RevenueDecline,
        AlertRule::CashFlowAttention,
        AlertRule::TargetAchievementRisk,
        AlertRule::OperationalEfficiency,
    ];

    /// 规则触发时的告警级别
    pub fn severity(&self) -> AlertSeverity {
        match self {
            AlertRule::RevenueDecline => AlertSeverity::Critical,
            AlertRule::CashFlowAttention
            | AlertRule::TargetAchievementRisk
            | AlertRule::OperationalEfficiency => AlertSeverity::Warning,
        }
    }

    /// 文案键前缀 (locales/*.yml)
    pub fn message_key(&self) -> &'static str {
        match self {
            AlertRule::RevenueDecline => "alert.revenue_decline",
            AlertRule::CashFlowAttention => "alert.cash_flow_attention",
            AlertRule::TargetAchievementRisk => "alert.target_achievement_risk",
            AlertRule::OperationalEfficiency => "alert.operational_efficiency",
        }
    }
}

impl fmt::Display for AlertRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertRule::RevenueDecline => write!(f, "REVENUE_DECLINE"),
            AlertRule::CashFlowAttention => write!(f, "CASH_FLOW_ATTENTION"),
            AlertRule::TargetAchievementRisk => write!(f, "TARGET_ACHIEVEMENT_RISK"),
            AlertRule::OperationalEfficiency => write!(f, "OPERATIONAL_EFFICIENCY"),
        }
    }
}
