// ==========================================
// 经营驾驶舱 - KPI 引擎
// ==========================================
// 职责: 快照 → KPI 记录 (增长率 / 目标达成 / 状态分级)
// 输入: Snapshot
// 输出: [RevenueGrowth, ProfitGrowth, CashFlowHealth, TargetProgress]
// ==========================================
// 红线: 纯函数,无状态,无 I/O;相同输入必然相同输出
// 除零: previous = 0 时按 IEEE 754 传播 inf/NaN,不抛错
// ==========================================

use crate::domain::kpi::KpiRecord;
use crate::domain::snapshot::Snapshot;
use crate::domain::types::{KpiName, KpiStatus, Trend};
use crate::engine::thresholds::*;

// ==========================================
// KpiEngine - KPI 引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct KpiEngine {
    // 无状态引擎
}

impl KpiEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算全部 KPI
    ///
    /// 四项 KPI 互相独立、每周期无条件全部计算
    ///
    /// # 返回
    /// 按 KpiName::ALL 顺序排列的 KPI 记录
    pub fn compute(&self, snapshot: &Snapshot) -> Vec<KpiRecord> {
        vec![
            self.revenue_growth(snapshot),
            self.profit_growth(snapshot),
            self.cash_flow_health(snapshot),
            self.target_progress(snapshot),
        ]
    }

    // ==========================================
    // 单项 KPI
    // ==========================================

    /// 营收环比增长
    ///
    /// 规则:
    /// - trend: > 0 为 Positive,否则 Negative
    /// - status: > 5 Excellent, > 0 Good, 否则 Concern
    pub fn revenue_growth(&self, snapshot: &Snapshot) -> KpiRecord {
        let value = growth_percent(snapshot.revenue.current, snapshot.revenue.previous);
        KpiRecord {
            name: KpiName::RevenueGrowth,
            value,
            trend: sign_trend(value),
            status: tiered_status(value, REVENUE_GROWTH_EXCELLENT, REVENUE_GROWTH_GOOD),
        }
    }

    /// 利润环比增长
    ///
    /// 规则:
    /// - trend: > 0 为 Positive,否则 Negative
    /// - status: > 3 Excellent, > 0 Good, 否则 Concern
    pub fn profit_growth(&self, snapshot: &Snapshot) -> KpiRecord {
        let value = growth_percent(snapshot.profit.current, snapshot.profit.previous);
        KpiRecord {
            name: KpiName::ProfitGrowth,
            value,
            trend: sign_trend(value),
            status: tiered_status(value, PROFIT_GROWTH_EXCELLENT, PROFIT_GROWTH_GOOD),
        }
    }

    /// 现金流健康度
    ///
    /// value/trend 取现金流环比增长,status 取 runway 月数:
    /// - runway > 12 Excellent, > 6 Good, 否则 Critical
    ///
    /// 两者口径不同 (可能出现"现金流下滑 + 状态优秀"),保持现状
    pub fn cash_flow_health(&self, snapshot: &Snapshot) -> KpiRecord {
        let value = growth_percent(snapshot.cash_flow.current, snapshot.cash_flow.previous);
        let runway = snapshot.cash_flow.runway;
        let status = if runway > RUNWAY_EXCELLENT_MONTHS {
            KpiStatus::Excellent
        } else if runway > RUNWAY_GOOD_MONTHS {
            KpiStatus::Good
        } else {
            KpiStatus::Critical
        };

        KpiRecord {
            name: KpiName::CashFlowHealth,
            value,
            trend: sign_trend(value),
            status,
        }
    }

    /// 年度营收目标达成率 (ytd / target × 100)
    ///
    /// 规则:
    /// - trend: > 80 为 Positive,否则 Neutral
    /// - status: > 90 Excellent, > 75 Good, 否则 Concern
    pub fn target_progress(&self, snapshot: &Snapshot) -> KpiRecord {
        let value = snapshot.revenue.ytd / snapshot.revenue.target * 100.0;
        let trend = if value > TARGET_PROGRESS_POSITIVE {
            Trend::Positive
        } else {
            Trend::Neutral
        };

        KpiRecord {
            name: KpiName::TargetProgress,
            value,
            trend,
            status: tiered_status(value, TARGET_PROGRESS_EXCELLENT, TARGET_PROGRESS_GOOD),
        }
    }
}

/// 计算全部 KPI (KpiEngine::compute 的函数形式)
pub fn compute_kpis(snapshot: &Snapshot) -> Vec<KpiRecord> {
    KpiEngine::new().compute(snapshot)
}

// ==========================================
// 计算辅助函数
// ==========================================

/// 环比增长百分比: (current - previous) / previous × 100
fn growth_percent(current: f64, previous: f64) -> f64 {
    (current - previous) / previous * 100.0
}

/// 符号趋势 (NaN 视为 Negative)
fn sign_trend(value: f64) -> Trend {
    if value > 0.0 {
        Trend::Positive
    } else {
        Trend::Negative
    }
}

/// 三档状态: > excellent 优秀, > good 良好, 否则需关注
fn tiered_status(value: f64, excellent: f64, good: f64) -> KpiStatus {
    if value > excellent {
        KpiStatus::Excellent
    } else if value > good {
        KpiStatus::Good
    } else {
        KpiStatus::Concern
    }
}
